//! Terminal results derived from a board.
//!
//! These values are computed on demand from the active snapshot and never
//! stored alongside the history, so jumping through time can never leave a
//! stale result behind.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// One of the eight fixed triples that form a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [Position; 3]);

impl Line {
    /// Positions in the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// True if `pos` lies on the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct WinningLine {
    /// Mark occupying all three cells.
    pub mark: Mark,
    /// The completed triple.
    pub line: Line,
}

/// Terminal evaluation of a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalResult {
    /// No line is complete and at least one cell is empty.
    Ongoing,
    /// A line is complete.
    Win(WinningLine),
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl TerminalResult {
    /// True when no more marks may be placed.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalResult::Ongoing)
    }

    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            TerminalResult::Win(win) => Some(win.mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            TerminalResult::Win(win) => Some(win.line),
            _ => None,
        }
    }

    /// Collapses the result into a status.
    pub fn status(&self) -> GameStatus {
        match self {
            TerminalResult::Ongoing => GameStatus::InProgress,
            TerminalResult::Win(win) => GameStatus::Won(win.mark),
            TerminalResult::Draw => GameStatus::Drawn,
        }
    }
}

/// Coarse game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Drawn,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "Winner: {}", mark),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}
