//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: the mark placed on snapshot *n* is X when *n* is odd and O when
/// *n* is even.
pub struct AlternatingMarksInvariant;

impl Invariant<GameEngine> for AlternatingMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        (1..history.len()).all(|n| {
            history
                .move_at(n)
                .is_some_and(|mv| mv.mark == Mark::for_move(n - 1))
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
