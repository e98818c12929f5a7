//! Command-line interface for ocean_tictactoe.

use crate::tui::SortOrder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ocean Tic Tac Toe - two players, one terminal, full move history
#[derive(Parser, Debug)]
#[command(name = "ocean_tictactoe")]
#[command(about = "Two-player tic-tac-toe with time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = "ocean_tictactoe.toml")]
    pub config: PathBuf,

    /// Override the log file from the config
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Move list order, overriding the config file
        #[arg(long, value_enum)]
        order: Option<SortOrder>,
    },

    /// Apply moves without a UI and print the resulting game
    Replay {
        /// Cell indices 0-8, comma separated, placed in order
        #[arg(value_delimiter = ',')]
        moves: Vec<usize>,

        /// Jump to this move after placing
        #[arg(long)]
        jump: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::parse_from(["ocean_tictactoe"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("ocean_tictactoe.toml"));
    }

    #[test]
    fn test_replay_parses_comma_list() {
        let cli = Cli::parse_from(["ocean_tictactoe", "replay", "0,4,1", "--jump", "2", "--json"]);
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 4, 1],
                jump: Some(2),
                json: true,
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "ocean_tictactoe",
            "tui",
            "--order",
            "descending",
            "--log-file",
            "x.log",
        ]);
        assert_eq!(
            cli.command,
            Some(Command::Tui {
                order: Some(SortOrder::Descending)
            })
        );
        assert_eq!(cli.log_file, Some(PathBuf::from("x.log")));
    }

    #[test]
    fn test_order_accepts_both_directions() {
        let cli = Cli::parse_from(["ocean_tictactoe", "tui", "--order", "asc"]);
        assert_eq!(
            cli.command,
            Some(Command::Tui {
                order: Some(SortOrder::Ascending)
            })
        );

        let cli = Cli::parse_from(["ocean_tictactoe", "tui", "--order", "desc"]);
        assert_eq!(
            cli.command,
            Some(Command::Tui {
                order: Some(SortOrder::Descending)
            })
        );

        let cli = Cli::parse_from(["ocean_tictactoe", "tui"]);
        assert_eq!(cli.command, Some(Command::Tui { order: None }));

        assert!(Cli::try_parse_from(["ocean_tictactoe", "tui", "--order", "sideways"]).is_err());
    }
}
