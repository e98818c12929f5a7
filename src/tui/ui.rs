//! Stateless rendering of the board, move list and status line.

use super::app::{App, Focus, HitMap};
use crate::theme::Theme;
use ocean_tictactoe::{GameView, Line as WinLine, Mark, Position, Square, TerminalResult};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws one frame and records click targets on `app`.
pub fn draw(frame: &mut Frame, app: &mut App, theme: &Theme) {
    let area = frame.area();
    let view = app.view();
    let mut hit_map = HitMap::default();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT + 2), // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &view, theme, &mut hit_map);
    draw_moves(frame, body[1], app, &view, theme, &mut hit_map);
    draw_status(frame, chunks[2], app, &view, theme);

    let help = Paragraph::new(
        "1-9/Enter place · arrows move · Tab switch panel · s sort · r restart · q quit",
    )
    .style(Style::default().fg(theme.text).add_modifier(Modifier::DIM))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    app.set_hit_map(hit_map);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    theme: &Theme,
    hit_map: &mut HitMap,
) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let winning_line = view.terminal.winning_line();
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let Some(pos) = Position::from_index(row * 3 + col) else {
                continue;
            };
            draw_cell(frame, cell_area, app, view, pos, winning_line, theme);
            hit_map.cells.push((cell_area, pos));
        }
        draw_separator_vertical(frame, cols[1], theme);
        draw_separator_vertical(frame, cols[3], theme);
    }
    draw_separator(frame, rows[1], theme);
    draw_separator(frame, rows[3], theme);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    pos: Position,
    winning_line: Option<WinLine>,
    theme: &Theme,
) {
    let (symbol, mut style) = match view.board.get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::DIM),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
        ),
    };
    style = style.bg(theme.surface);

    if winning_line.is_some_and(|line| line.contains(pos)) {
        style = style.bg(theme.success).fg(theme.surface);
    }
    if app.focus() == Focus::Board && app.cursor() == pos {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![Line::from(""), Line::from(Span::styled(symbol, style)), Line::from("")];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(theme.primary));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(theme.primary));
    frame.render_widget(sep, area);
}

fn draw_moves(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    theme: &Theme,
    hit_map: &mut HitMap,
) {
    let border_style = if app.focus() == Focus::History {
        Style::default().fg(theme.primary)
    } else {
        Style::default().fg(theme.text)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Moves ({}) ", app.order()))
        .style(Style::default().bg(theme.surface).fg(theme.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = app.ordered_entries();
    let height = inner.height as usize;
    let offset = scroll_offset(app.selected(), entries.len(), height);

    for (row, entry) in entries.into_iter().enumerate().skip(offset).take(height) {
        let y = inner.y + (row - offset) as u16;
        let rect = Rect::new(inner.x, y, inner.width, 1);

        let is_current = entry.move_number == view.current_move;
        let (text, mut style) = if is_current {
            (
                format!("▶ {}", entry.description()),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )
        } else {
            (format!("  {}", entry.description()), Style::default().fg(theme.text))
        };
        if app.focus() == Focus::History && app.selected() == row {
            style = style.add_modifier(Modifier::REVERSED);
        }

        frame.render_widget(Paragraph::new(text).style(style), rect);
        hit_map.entries.push((rect, entry.move_number));
    }
}

/// First visible row of a list of `len` rows shown `height` at a time,
/// scrolled just far enough that `selected` is on screen.
pub fn scroll_offset(selected: usize, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    let selected = selected.min(len - 1);
    selected.saturating_sub(height - 1)
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, view: &GameView, theme: &Theme) {
    let color = match view.terminal {
        TerminalResult::Ongoing => theme.primary,
        TerminalResult::Win(_) => theme.success,
        TerminalResult::Draw => theme.secondary,
    };

    let mut spans = vec![Span::styled(
        view.status_text(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    let engine = app.engine();
    if !engine.is_latest() {
        spans.push(Span::styled(
            format!(
                "  (viewing move {} of {})",
                view.current_move,
                engine.history().last_index()
            ),
            Style::default().fg(theme.text),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        // Everything fits.
        assert_eq!(scroll_offset(9, 10, 10), 0);
        assert_eq!(scroll_offset(0, 3, 0), 0);

        // Selection near the top needs no scrolling.
        assert_eq!(scroll_offset(2, 10, 4), 0);
        assert_eq!(scroll_offset(3, 10, 4), 0);

        // Selection past the window becomes the bottom row.
        assert_eq!(scroll_offset(4, 10, 4), 1);
        assert_eq!(scroll_offset(9, 10, 4), 6);

        // Stale selections clamp to the last row.
        assert_eq!(scroll_offset(42, 10, 4), 6);
    }
}
