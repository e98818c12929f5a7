//! Terminal UI for Ocean Tic Tac Toe

mod app;
mod guard;
mod input;
mod ui;

pub use app::{App, Focus, HitMap, SortOrder};
pub use guard::{TerminalGuard, install_panic_hook, restore_screen};
pub use input::{digit_position, move_cursor};
pub use ui::{draw, scroll_offset};

use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip(theme))]
pub fn run_tui(order: SortOrder, theme: Theme) -> Result<()> {
    info!("Starting Ocean Tic Tac Toe TUI");

    install_panic_hook();
    let guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(order), &theme);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, wait for one input event, handle it, repeat.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    theme: &Theme,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, &mut app, theme))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row)
            }
            _ => {}
        }
    }
    Ok(())
}
