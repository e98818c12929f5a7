//! Cursor invariant: the current move names an existing snapshot.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `0 <= current_move < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameEngine> for CursorInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_move() < engine.history().len()
    }

    fn description() -> &'static str {
        "Current move points into history"
    }
}
