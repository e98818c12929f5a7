//! Ocean Professional colour palette.

use crate::config::ThemeConfig;
use derive_more::{Display, Error};
use ratatui::style::Color;
use tracing::instrument;

/// Resolved terminal colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Accent for X marks, the title and the active move.
    pub primary: Color,
    /// Accent for O marks.
    pub secondary: Color,
    /// Winning line highlight.
    pub success: Color,
    /// Error text.
    pub error: Color,
    /// Screen background.
    pub background: Color,
    /// Panel background.
    pub surface: Color,
    /// Body text.
    pub text: Color,
}

impl Theme {
    /// Parses every hex colour in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] naming the first field that is not a colour.
    #[instrument]
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        Ok(Self {
            primary: parse_color("primary", config.primary())?,
            secondary: parse_color("secondary", config.secondary())?,
            success: parse_color("success", config.success())?,
            error: parse_color("error", config.error())?,
            background: parse_color("background", config.background())?,
            surface: parse_color("surface", config.surface())?,
            text: parse_color("text", config.text())?,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x25, 0x63, 0xEB),
            secondary: Color::Rgb(0xF5, 0x9E, 0x0B),
            success: Color::Rgb(0x10, 0xB9, 0x81),
            error: Color::Rgb(0xEF, 0x44, 0x44),
            background: Color::Rgb(0xF9, 0xFA, 0xFB),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x11, 0x18, 0x27),
        }
    }
}

#[track_caller]
fn parse_color(field: &'static str, value: &str) -> Result<Color, ThemeError> {
    value
        .trim()
        .parse::<Color>()
        .map_err(|_| ThemeError::new(field, value))
}

/// A theme field that does not parse as a colour.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid colour {:?} for theme.{} at {}:{}", value, field, file, line)]
pub struct ThemeError {
    /// Offending field.
    pub field: &'static str,
    /// Offending value.
    pub value: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ThemeError {
    /// Creates a new theme error with caller location tracking.
    #[track_caller]
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            field,
            value: value.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_default_theme() {
        let theme = Theme::from_config(&ThemeConfig::default()).expect("default palette parses");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_bad_colour_names_field() {
        let err = parse_color("primary", "not-a-colour").unwrap_err();
        assert_eq!(err.field, "primary");
        assert!(err.to_string().contains("theme.primary"));
    }
}
