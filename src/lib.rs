//! Ocean Tic Tac Toe - terminal shell
//!
//! Renders the [`ocean_tictactoe`] engine in the terminal and forwards key
//! presses and mouse clicks back into it.
//!
//! # Architecture
//!
//! - **Config**: TOML shell settings with defaults
//! - **Theme**: Ocean Professional palette resolved to terminal colours
//! - **TUI**: event loop, input handling and rendering
//! - **Replay**: headless move application for scripts and tests

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod theme;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ShellConfig, ThemeConfig};
pub use theme::{Theme, ThemeError};
