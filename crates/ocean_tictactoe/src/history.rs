//! Board snapshot history.

use super::action::Move;
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots.
///
/// Snapshot 0 is always the empty board, so a history is never empty.
/// Each later snapshot differs from its predecessor by one placed mark.
///
/// Serialized as a plain list of boards. Deserializing checks the list
/// with [`History::try_from`], so a decoded history keeps the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots (at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: snapshot 0 always exists.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the most recent snapshot.
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Drops every snapshot after `index`, then appends `board`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub(crate) fn branch(&mut self, index: usize, board: Board) -> usize {
        let discarded = self.snapshots.len().saturating_sub(index + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(index + 1);
        self.snapshots.push(board);
        self.last_index()
    }

    /// Returns to the single empty snapshot.
    pub(crate) fn clear(&mut self) {
        self.snapshots.truncate(1);
        self.snapshots[0] = Board::new();
    }

    /// The move that produced snapshot `index`.
    ///
    /// `None` for snapshot 0 and for indices past the end.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let after = self.snapshots.get(index)?;
        let before = self.snapshots.get(index.checked_sub(1)?)?;
        let pos = after.diff(before).into_iter().next()?;
        after.get(pos).mark().map(|mark| Move::new(mark, pos))
    }

    /// One entry per snapshot, in ascending order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        (0..self.snapshots.len())
            .map(|n| HistoryEntry::new(n, self.move_at(n)))
            .collect()
    }

    /// Wraps `snapshots` without checking them.
    #[cfg(test)]
    pub(crate) fn from_snapshots_unchecked(snapshots: Vec<Board>) -> Self {
        Self { snapshots }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Board>> for History {
    type Error = HistoryError;

    #[instrument(skip(snapshots), fields(len = snapshots.len()))]
    fn try_from(snapshots: Vec<Board>) -> Result<Self, Self::Error> {
        let first = snapshots.first().ok_or(HistoryError::Empty)?;
        if *first != Board::new() {
            return Err(HistoryError::StartNotEmpty);
        }

        for (step, pair) in snapshots.windows(2).enumerate() {
            let (before, after) = (&pair[0], &pair[1]);
            let changed = after.diff(before);
            let expected = Mark::for_move(step);
            let legal = matches!(changed.as_slice(), [pos]
                if before.get(*pos) == Square::Empty
                    && after.get(*pos) == Square::Occupied(expected));
            if !legal {
                return Err(HistoryError::IllegalStep(step + 1));
            }
        }

        Ok(Self { snapshots })
    }
}

impl From<History> for Vec<Board> {
    fn from(history: History) -> Self {
        history.snapshots
    }
}

/// Why a list of boards is not a valid history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// No snapshots at all.
    #[display("History has no snapshots")]
    Empty,

    /// Snapshot 0 has marks on it.
    #[display("History does not start from the empty board")]
    StartNotEmpty,

    /// Snapshot `n` is not its predecessor plus the expected mark.
    #[display("Snapshot {} is not one legal move after the previous one", _0)]
    IllegalStep(usize),
}

impl std::error::Error for HistoryError {}

/// A row in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    /// Snapshot index.
    pub move_number: usize,
    /// The move that produced the snapshot (`None` for the game start).
    pub mv: Option<Move>,
}

impl HistoryEntry {
    /// Label for the move list.
    ///
    /// Includes the 1-based (row, col) of the mark placed on this move.
    pub fn description(&self) -> String {
        match self.mv {
            None => "Go to game start".to_string(),
            Some(mv) => format!(
                "Go to move #{} ({}, {})",
                self.move_number,
                mv.position.row() + 1,
                mv.position.col() + 1
            ),
        }
    }
}
