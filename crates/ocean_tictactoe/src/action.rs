//! Input events and move records.
//!
//! The presentation layer never touches engine state directly. Every click
//! becomes an [`Action`] and the engine decides what, if anything, happens.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A user input event forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A cell was clicked.
    PlaceMark(Position),
    /// A history entry was clicked.
    JumpTo(usize),
    /// The restart button was clicked.
    Reset,
}

/// A mark placed at a position: the change between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a placement was ignored.
///
/// Ignored placements are not failures from the player's point of view; the
/// engine reports the reason so callers can log or explain it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The active board is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell.
    #[display("Index {} is outside the board", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}
