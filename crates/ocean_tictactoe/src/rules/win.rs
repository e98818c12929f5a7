//! Win detection logic for tic-tac-toe.

use super::super::outcome::WinningLine;
use super::super::types::{Board, Square};
use super::lines::LINES;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in [`LINES`] order together with the mark
/// that occupies it, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark().map(|mark| WinningLine::new(mark, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::X)
            .with_mark(Position::TopRight, Mark::X);
        let win = check_winner(&board).expect("top row is complete");
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .with_mark(Position::TopRight, Mark::O)
            .with_mark(Position::Center, Mark::O)
            .with_mark(Position::BottomLeft, Mark::O);
        let win = check_winner(&board).expect("anti-diagonal is complete");
        assert_eq!(win.mark, Mark::O);
        assert_eq!(win.line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::O)
            .with_mark(Position::TopRight, Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::X);
        assert_eq!(check_winner(&board), None);
    }
}
