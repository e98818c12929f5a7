//! Draw detection logic for tic-tac-toe.

use super::super::types::Board;
use super::win::check_winner;
use tracing::instrument;

/// A full board with no complete line.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
