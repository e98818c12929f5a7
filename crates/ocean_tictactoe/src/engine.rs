//! The game engine: history, time-travel and derived state.

use super::action::{Action, Move, MoveError};
use super::history::{History, HistoryEntry};
use super::invariants::{EngineInvariants, InvariantSet};
use super::outcome::{GameStatus, TerminalResult};
use super::position::Position;
use super::rules::evaluate_terminal;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Owns the snapshot history and the currently selected move.
///
/// Everything else (whose turn it is, win/draw, the move list) is derived
/// from these two fields on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    history: History,
    current_move: usize,
}

impl GameEngine {
    /// Creates an engine at the start of a game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_move: 0,
        }
    }

    /// Builds an engine by applying `actions` in order.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn replay(actions: &[Action]) -> Self {
        let mut engine = Self::new();
        for action in actions {
            engine.apply(*action);
        }
        engine
    }

    /// Assembles an engine from raw parts, skipping every check.
    #[cfg(test)]
    pub(crate) fn from_parts(history: History, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutations
    // ─────────────────────────────────────────────────────────────

    /// Dispatches an input event.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::PlaceMark(pos) => self.place_mark(pos),
            Action::JumpTo(n) => self.jump_to(n),
            Action::Reset => self.reset(),
        }
    }

    /// Places the current turn's mark at `pos`.
    ///
    /// Ignored when the active board is already decided or the square is
    /// taken. Use [`GameEngine::try_place_mark`] to learn why.
    pub fn place_mark(&mut self, pos: Position) {
        if let Err(e) = self.try_place_mark(pos) {
            debug!(error = %e, "Ignoring placement");
        }
    }

    /// Index-based form of [`GameEngine::place_mark`].
    pub fn place_mark_at(&mut self, index: usize) {
        if let Err(e) = self.try_place_mark_at(index) {
            debug!(error = %e, "Ignoring placement");
        }
    }

    /// Index-based form of [`GameEngine::try_place_mark`].
    pub fn try_place_mark_at(&mut self, index: usize) -> Result<Move, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_place_mark(pos)
    }

    /// Places the current turn's mark at `pos`, reporting why it was refused.
    ///
    /// On success any snapshots after the current move are discarded and the
    /// new board becomes the latest snapshot.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the active board is won or drawn.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(current_move = self.current_move, mark = %self.to_move()))]
    pub fn try_place_mark(&mut self, pos: Position) -> Result<Move, MoveError> {
        let board = *self.current_board();

        if evaluate_terminal(&board).is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move();
        self.current_move = self
            .history
            .branch(self.current_move, board.with_mark(pos, mark));
        debug!(current_move = self.current_move, "Mark placed");

        self.debug_check_invariants();
        Ok(Move::new(mark, pos))
    }

    /// Makes snapshot `move_number` active without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `move_number` is not an existing snapshot index. The
    /// presentation layer only offers indices from the move list, so an
    /// out-of-range value is a caller bug.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_number: usize) {
        assert!(
            move_number < self.history.len(),
            "jump_to({}) outside history of length {}",
            move_number,
            self.history.len()
        );
        self.current_move = move_number;
        self.debug_check_invariants();
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.clear();
        self.current_move = 0;
        debug!("Game reset");
        self.debug_check_invariants();
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            let result = EngineInvariants::check_all(self);
            debug_assert!(result.is_ok(), "Engine invariants violated: {:?}", result);
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived state
    // ─────────────────────────────────────────────────────────────

    /// The snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the active snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The active board.
    pub fn current_board(&self) -> &Board {
        // current_move < len is maintained by every mutation.
        &self.history.snapshots()[self.current_move]
    }

    /// Whose turn it is on the active board.
    pub fn to_move(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Terminal evaluation of the active board.
    pub fn terminal(&self) -> TerminalResult {
        evaluate_terminal(self.current_board())
    }

    /// Coarse status of the active board.
    pub fn status(&self) -> GameStatus {
        self.terminal().status()
    }

    /// True when the active snapshot is the latest one.
    pub fn is_latest(&self) -> bool {
        self.current_move == self.history.last_index()
    }

    /// Move list entries in ascending order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    /// Everything the presentation layer needs to render one frame.
    #[instrument(skip(self), level = "trace")]
    pub fn view(&self) -> GameView {
        let terminal = self.terminal();
        GameView {
            board: *self.current_board(),
            to_move: self.to_move(),
            terminal,
            status: terminal.status(),
            current_move: self.current_move,
            entries: self.entries(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Render-ready snapshot of the engine's derived state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The active board.
    pub board: Board,
    /// Whose turn it is on the active board.
    pub to_move: Mark,
    /// Terminal evaluation of the active board.
    pub terminal: TerminalResult,
    /// Coarse status derived from `terminal`.
    pub status: GameStatus,
    /// Index of the active snapshot.
    pub current_move: usize,
    /// One entry per snapshot, ascending.
    pub entries: Vec<HistoryEntry>,
}

impl GameView {
    /// Status line text.
    pub fn status_text(&self) -> String {
        match self.terminal {
            TerminalResult::Ongoing => format!("Next player: {}", self.to_move),
            TerminalResult::Win(win) => format!("Winner: {}", win.mark),
            TerminalResult::Draw => "Draw".to_string(),
        }
    }
}
