//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`]. Nothing here looks at history or
//! turn order; the engine feeds in whichever snapshot is active.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_draw;
pub use lines::LINES;
pub use win::check_winner;

use super::outcome::TerminalResult;
use super::types::Board;
use tracing::instrument;

/// Evaluates the terminal state of a board.
///
/// The first complete line in [`LINES`] order wins; otherwise a full board is
/// a draw (see [`is_draw`]) and anything else is still ongoing.
#[instrument(level = "trace")]
pub fn evaluate_terminal(board: &Board) -> TerminalResult {
    if let Some(win) = check_winner(board) {
        return TerminalResult::Win(win);
    }
    if is_draw(board) {
        return TerminalResult::Draw;
    }
    TerminalResult::Ongoing
}
