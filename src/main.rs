//! Ocean Tic Tac Toe - command-line entry point.

use anyhow::Result;
use clap::Parser;
use ocean_tictactoe_tui::{
    Cli, Command, ShellConfig, Theme,
    replay::{render, replay},
    tui::{SortOrder, run_tui},
};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ShellConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    init_tracing(config.log_file())?;

    match cli.command.unwrap_or(Command::Tui { order: None }) {
        Command::Tui { order } => {
            let config = match order {
                Some(order) => config.with_descending(order == SortOrder::Descending),
                None => config,
            };
            let theme = Theme::from_config(config.theme())?;
            run_tui(SortOrder::from_descending(*config.descending()), theme)
        }
        Command::Replay { moves, jump, json } => {
            info!(?moves, ?jump, "Replaying moves");
            let view = replay(&moves, jump)?;
            print!("{}", render(&view, json)?);
            Ok(())
        }
    }
}

/// Logs go to a file so they never draw over the alternate screen.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
