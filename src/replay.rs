//! Non-interactive replay of a move list.

use anyhow::{Result, ensure};
use ocean_tictactoe::{GameEngine, GameView};
use tracing::{debug, instrument};

/// Places `moves` in order, optionally jumps, and returns the view.
///
/// Indices outside the board and moves on occupied cells are ignored the
/// same way the UI ignores them.
///
/// # Errors
///
/// Fails if `jump` is not an existing move number.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Result<GameView> {
    let mut engine = GameEngine::new();
    for &index in moves {
        if let Err(e) = engine.try_place_mark_at(index) {
            debug!(index, error = %e, "Skipping move");
        }
    }

    if let Some(n) = jump {
        ensure!(
            n < engine.history().len(),
            "Cannot jump to move {}: history has {} entries",
            n,
            engine.history().len()
        );
        engine.jump_to(n);
    }

    Ok(engine.view())
}

/// Renders a view as text or pretty JSON.
#[instrument(skip(view))]
pub fn render(view: &GameView, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(view)?);
    }

    let mut out = String::new();
    out.push_str(&view.board.display());
    out.push_str("\n\n");
    out.push_str(&view.status_text());
    out.push('\n');
    for entry in &view.entries {
        let marker = if entry.move_number == view.current_move { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.description()));
    }
    Ok(out)
}
