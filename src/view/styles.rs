//! Tree colors.
//!
//! Colors come from configuration as ratatui color names (`"blue"`,
//! `"darkgray"`, `"#ff8800"`). Unknown names fall back to the terminal default.

use crate::config::ResolvedConfig;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use tracing::warn;

// ===== ColorConfig =====

/// Whether color output is enabled.
///
/// Off when the config says so (`--no-color`) or `NO_COLOR` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Combine the config flag with the `NO_COLOR` environment variable.
    pub fn from_env_and_config(use_color: bool) -> Self {
        let enabled = use_color && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TreeColors =====

/// Styles used when drawing the tree and its popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeColors {
    /// Node text.
    pub text: Style,
    /// Connecting lines.
    pub lines: Style,
    /// Rows of the focused node.
    pub focused: Style,
    /// Highlighted context menu row.
    pub menu_selected: Style,
    /// Disabled menu rows (title, separator).
    pub menu_disabled: Style,
}

impl Default for TreeColors {
    fn default() -> Self {
        Self::with_colors(Color::Reset, Color::DarkGray)
    }
}

impl TreeColors {
    /// Styles from configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        if !ColorConfig::from_env_and_config(config.use_color).colors_enabled() {
            return Self::monochrome();
        }
        Self::with_colors(
            parse_color(&config.text_color, Color::Reset),
            parse_color(&config.line_color, Color::DarkGray),
        )
    }

    /// Styles without any color; focus and selection use reverse video.
    pub fn monochrome() -> Self {
        let reversed = Style::default().add_modifier(Modifier::REVERSED);
        Self {
            text: Style::default(),
            lines: Style::default(),
            focused: reversed,
            menu_selected: reversed,
            menu_disabled: Style::default(),
        }
    }

    fn with_colors(text: Color, lines: Color) -> Self {
        Self {
            text: Style::default().fg(text),
            lines: Style::default().fg(lines),
            focused: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            menu_selected: Style::default().bg(Color::Cyan).fg(Color::Black),
            menu_disabled: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Parse a color name, logging and returning `fallback` if it is unknown.
pub fn parse_color(name: &str, fallback: Color) -> Color {
    Color::from_str(name).unwrap_or_else(|_| {
        warn!(color = name, "unknown color name");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_accepts_names_and_hex() {
        assert_eq!(parse_color("blue", Color::Reset), Color::Blue);
        assert_eq!(parse_color("#ff8800", Color::Reset), Color::Rgb(255, 136, 0));
    }

    #[test]
    fn parse_color_falls_back_on_garbage() {
        assert_eq!(parse_color("not-a-color", Color::Green), Color::Green);
    }

    #[test]
    fn no_color_config_is_monochrome() {
        let config = ResolvedConfig {
            use_color: false,
            ..ResolvedConfig::default()
        };
        assert_eq!(TreeColors::from_config(&config), TreeColors::monochrome());
    }

    #[test]
    fn monochrome_has_no_colors() {
        let colors = TreeColors::monochrome();
        assert_eq!(colors.text.fg, None);
        assert_eq!(colors.lines.fg, None);
        assert!(colors.focused.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn color_config_respects_flag() {
        assert!(!ColorConfig::from_env_and_config(false).colors_enabled());
    }
}
