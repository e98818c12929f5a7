//! Application state and input handling.
//!
//! `App` owns the engine and the shell-only state (cursor, focus, move list
//! order). Input handlers turn keys and clicks into engine actions; drawing
//! reads everything back from [`GameEngine::view`].

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use ocean_tictactoe::{Action, GameEngine, GameView, HistoryEntry, Position};
use ratatui::layout::Rect;
use tracing::{debug, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, clap::ValueEnum)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    #[value(alias = "asc")]
    Ascending,
    /// Latest move first.
    #[value(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// Order stored in the config file's `descending` flag.
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    /// Toggles between the two orders.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Screen regions from the last draw, used to route mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Board cells.
    pub cells: Vec<(Rect, Position)>,
    /// Move list rows and the move number each one jumps to.
    pub entries: Vec<(Rect, usize)>,
}

impl HitMap {
    fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .find(|(rect, _)| contains(rect, column, row))
            .map(|(_, pos)| *pos)
    }

    fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        self.entries
            .iter()
            .find(|(rect, _)| contains(rect, column, row))
            .map(|(_, n)| *n)
    }
}

fn contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    order: SortOrder,
    /// Row in the displayed (possibly reversed) move list.
    selected: usize,
    hit_map: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given move list order.
    pub fn new(order: SortOrder) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            order,
            selected: 0,
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Derived engine state for rendering.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Screen regions from the last draw.
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Replaces the hit map after a draw.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Move list entries in display order.
    pub fn ordered_entries(&self) -> Vec<HistoryEntry> {
        let mut entries = self.engine.entries();
        if self.order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Display row of `move_number` in the current order.
    fn row_of(&self, move_number: usize) -> usize {
        match self.order {
            SortOrder::Ascending => move_number,
            SortOrder::Descending => self.engine.history().last_index() - move_number,
        }
    }

    /// Move number shown at display row `row`.
    fn move_at_row(&self, row: usize) -> usize {
        match self.order {
            SortOrder::Ascending => row,
            SortOrder::Descending => self.engine.history().last_index().saturating_sub(row),
        }
    }

    /// Applies an action and keeps the list selection on the active move.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        self.engine.apply(action);
        self.selected = self.row_of(self.engine.current_move());
        debug!(
            current_move = self.engine.current_move(),
            status = %self.engine.status(),
            "Action applied"
        );
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.dispatch(Action::Reset),
            KeyCode::Char('s') => self.toggle_order(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected = self.row_of(self.engine.current_move());
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.dispatch(Action::PlaceMark(pos));
                }
            }
            key => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Action::PlaceMark(self.cursor)),
            key => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last_row = self.engine.history().last_index();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last_row),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last_row,
            KeyCode::Enter | KeyCode::Char(' ') => {
                let n = self.move_at_row(self.selected);
                self.dispatch(Action::JumpTo(n));
            }
            _ => {}
        }
    }

    /// Handles a left click at terminal coordinates.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(pos) = self.hit_map.cell_at(column, row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.dispatch(Action::PlaceMark(pos));
        } else if let Some(n) = self.hit_map.entry_at(column, row) {
            // Rows from a stale frame may name moves discarded since.
            if n < self.engine.history().len() {
                self.focus = Focus::History;
                self.dispatch(Action::JumpTo(n));
            }
        }
    }

    /// Flips the move list order, keeping the same move selected.
    pub fn toggle_order(&mut self) {
        let n = self.move_at_row(self.selected);
        self.order = self.order.toggle();
        self.selected = self.row_of(n);
        debug!(order = %self.order, "Move list order changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocean_tictactoe::{GameStatus, Mark};

    #[test]
    fn test_digits_place_marks() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.engine().history().len(), 3);
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.engine().history().move_at(1).map(|mv| mv.position),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(SortOrder::Ascending);
        for c in ['1', '5', '9'] {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 3);

        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().current_move(), 1);
        assert_eq!(app.engine().to_move(), Mark::O);
        assert_eq!(app.engine().history().len(), 4);
    }

    #[test]
    fn test_descending_order_maps_rows() {
        let mut app = App::new(SortOrder::Descending);
        for c in ['1', '5'] {
            app.handle_key(KeyCode::Char(c));
        }
        let entries = app.ordered_entries();
        assert_eq!(entries.first().map(|e| e.move_number), Some(2));
        assert_eq!(app.selected(), 0);

        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::End);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().current_move(), 0);
    }

    #[test]
    fn test_sort_order_labels() {
        assert_eq!(SortOrder::Ascending.to_string(), "Ascending");
        assert_eq!(SortOrder::Descending.to_string(), "Descending");
        assert_eq!(SortOrder::from_descending(true), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
    }

    #[test]
    fn test_toggle_order_keeps_selection() {
        let mut app = App::new(SortOrder::Ascending);
        for c in ['1', '5', '9'] {
            app.handle_key(KeyCode::Char(c));
        }
        assert_eq!(app.selected(), 3);
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.order(), SortOrder::Descending);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(SortOrder::Ascending);
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        assert_eq!(app.engine().status(), GameStatus::Won(Mark::X));

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.engine(), &GameEngine::new());
        assert!(!app.should_quit());

        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_clicks_route_through_hit_map() {
        let mut app = App::new(SortOrder::Ascending);
        app.set_hit_map(HitMap {
            cells: vec![(Rect::new(0, 0, 5, 3), Position::TopLeft)],
            entries: vec![(Rect::new(10, 0, 20, 1), 0), (Rect::new(10, 1, 20, 1), 1)],
        });

        app.handle_click(2, 1);
        assert_eq!(app.engine().history().len(), 2);

        app.handle_click(12, 0);
        assert_eq!(app.engine().current_move(), 0);
        assert_eq!(app.focus(), Focus::History);

        // Nothing here.
        app.handle_click(40, 40);
        assert_eq!(app.engine().current_move(), 0);
    }
}
