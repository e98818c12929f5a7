//! Single cell delta invariant: each snapshot adds exactly one mark.

use super::super::{GameEngine, Square};
use super::Invariant;

/// Invariant: snapshot *n* differs from *n-1* in exactly one cell, which went
/// from empty to occupied.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameEngine> for SingleCellDeltaInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().snapshots().windows(2).all(|pair| {
            let changed = pair[1].diff(&pair[0]);
            changed.len() == 1
                && pair[0].get(changed[0]) == Square::Empty
                && pair[1].get(changed[0]) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one mark on an empty cell"
    }
}
