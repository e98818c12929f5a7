//! Terminal mode setup and restore.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, including when setup fails
/// halfway or the game loop unwinds from a panic.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then switches `out` to the alternate screen with
    /// mouse capture.
    #[instrument(skip(out))]
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out,
            raw_mode: true,
        };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal switched to alternate screen");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        restore_screen(&mut self.out);
    }
}

/// Leaves the alternate screen, stops mouse capture and shows the cursor.
///
/// Errors are ignored: this runs while tearing down.
pub fn restore_screen<W: Write>(out: &mut W) {
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
}

/// Chains a panic hook that restores the terminal before the panic message
/// is printed, so the message lands on the normal screen.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        restore_screen(&mut io::stdout());
        previous(info);
    }));
}
