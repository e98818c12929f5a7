//! Initial snapshot invariant: history starts from the empty board.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: snapshot 0 is the all-empty board.
pub struct InitialEmptyInvariant;

impl Invariant<GameEngine> for InitialEmptyInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
