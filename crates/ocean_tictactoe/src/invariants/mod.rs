//! First-class invariants for the game engine.
//!
//! Invariants are logical properties of the history and cursor that must hold
//! after every action. They are checked in debug builds and tested
//! independently.

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod initial_empty;
pub mod single_cell_delta;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use initial_empty::InitialEmptyInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        warn!(invariant = $inv::description(), "Invariant violated");
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    InitialEmptyInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarksInvariant,
    CursorInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameEngine, History, Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        let engine = GameEngine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut engine = GameEngine::new();
        engine.place_mark(Position::TopLeft);
        engine.place_mark(Position::Center);
        engine.place_mark(Position::TopRight);
        engine.jump_to(1);
        engine.place_mark(Position::BottomLeft);
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new();
        type TwoInvariants = (InitialEmptyInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        // X moves twice and the cursor points past the end.
        let b1 = Board::new().with_mark(Position::TopLeft, Mark::X);
        let b2 = b1.with_mark(Position::Center, Mark::X);
        let history = History::from_snapshots_unchecked(vec![Board::new(), b1, b2]);
        let engine = GameEngine::from_parts(history, 3);

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        let described: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            described,
            vec![
                AlternatingMarksInvariant::description(),
                CursorInBoundsInvariant::description(),
            ]
        );
    }

    #[test]
    fn test_invariant_set_detects_corrupted_history() {
        let start = Board::new().with_mark(Position::Center, Mark::O);
        let two_marks = start
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopRight, Mark::O);
        let history = History::from_snapshots_unchecked(vec![start, two_marks]);
        let engine = GameEngine::from_parts(history, 1);

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        let described: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(described.contains(&InitialEmptyInvariant::description()));
        assert!(described.contains(&SingleCellDeltaInvariant::description()));
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new("Cursor points into history");
        assert_eq!(
            violation.to_string(),
            "Invariant violated: Cursor points into history"
        );
    }
}
