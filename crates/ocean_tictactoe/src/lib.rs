//! Tic-tac-toe game logic with move history and time-travel.
//!
//! The engine keeps an ordered list of board snapshots and a cursor into it.
//! Placing a mark after jumping back discards the snapshots that followed the
//! cursor. Win and draw are recomputed from the active snapshot on every
//! read.
//!
//! # Example
//!
//! ```
//! use ocean_tictactoe::{GameEngine, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 7, 2] {
//!     engine.place_mark_at(index);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Mark::X));
//!
//! engine.jump_to(2);
//! engine.place_mark_at(8);
//! assert_eq!(engine.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Action, Move, MoveError};
pub use engine::{GameEngine, GameView};
pub use history::{History, HistoryEntry, HistoryError};
pub use outcome::{GameStatus, Line, TerminalResult, WinningLine};
pub use position::Position;
pub use rules::evaluate_terminal;
pub use types::{Board, Mark, Square};
