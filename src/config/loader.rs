//! Configuration file loading with precedence handling.

use crate::model::NodeKind;
use crate::view_state::context_menu::{CommandId, ContextMenu};
use crate::view_state::style::TreeStyle;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TAGTREE_CONFIG";

/// Environment variable overriding `show_lines`.
pub const SHOW_LINES_ENV: &str = "TAGTREE_SHOW_LINES";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or an invalid value.
    #[error("Invalid config in {path}: {reason}")]
    ParseError {
        /// Path with invalid content.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tagtree/config.toml`:
///
/// ```toml
/// indent = 4
/// show_lines = false
/// collapsed_marker = " …"
/// text_color = "white"
///
/// [context_menu]
/// leaf = ["modify-text"]
/// container = ["add-event", "delete-node"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Horizontal indentation per depth level, in cells.
    #[serde(default)]
    pub indent: Option<i32>,

    /// Left padding, in cells.
    #[serde(default)]
    pub padding: Option<i32>,

    /// Extra rows under each wrapped line.
    #[serde(default)]
    pub line_padding: Option<i32>,

    /// Extra rows below the document before scrolling kicks in.
    #[serde(default)]
    pub scroll_margin: Option<i32>,

    /// Draw connecting lines.
    #[serde(default)]
    pub show_lines: Option<bool>,

    /// Text appended to collapsed nodes with children.
    #[serde(default)]
    pub collapsed_marker: Option<String>,

    /// Node text color (ratatui color name or `#rrggbb`).
    #[serde(default)]
    pub text_color: Option<String>,

    /// Connecting line color.
    #[serde(default)]
    pub line_color: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Per-kind context menu overrides (kind name → command names).
    #[serde(default)]
    pub context_menu: Option<HashMap<String, Vec<CommandId>>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Indent per level.
    pub indent: i32,
    /// Left padding.
    pub padding: i32,
    /// Extra rows per line.
    pub line_padding: i32,
    /// Scroll margin.
    pub scroll_margin: i32,
    /// Connecting lines on/off.
    pub show_lines: bool,
    /// Collapsed marker text.
    pub collapsed_marker: String,
    /// Node text color name.
    pub text_color: String,
    /// Connecting line color name.
    pub line_color: String,
    /// Emit colors at all.
    pub use_color: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Context menu overrides.
    pub context_menu: HashMap<NodeKind, Vec<CommandId>>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let style = TreeStyle::default();
        Self {
            indent: style.indent,
            padding: style.padding,
            line_padding: style.line_padding,
            scroll_margin: style.scroll_margin,
            show_lines: style.show_lines,
            collapsed_marker: style.collapsed_marker,
            text_color: "reset".to_string(),
            line_color: "darkgray".to_string(),
            use_color: true,
            log_file_path: default_log_path(),
            context_menu: HashMap::new(),
        }
    }
}

impl ResolvedConfig {
    /// Style value for layout and painting. Negative sizes become 0.
    pub fn tree_style(&self) -> TreeStyle {
        TreeStyle {
            indent: self.indent.max(0),
            padding: self.padding.max(0),
            line_padding: self.line_padding.max(0),
            scroll_margin: self.scroll_margin.max(0),
            show_lines: self.show_lines,
            collapsed_marker: self.collapsed_marker.clone(),
        }
    }

    /// Context menu table with overrides applied.
    pub fn context_menu(&self) -> ContextMenu {
        ContextMenu::with_overrides(&self.context_menu)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tagtree/tagtree.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tagtree").join("tagtree.log")
    } else {
        PathBuf::from("tagtree.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but cannot be read or parsed, or names an
/// unknown node kind in `context_menu`.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    if let Some(menu) = &config.context_menu {
        for kind in menu.keys() {
            kind.parse::<NodeKind>().map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        }
    }

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tagtree/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tagtree").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TAGTREE_CONFIG` environment variable
/// 3. Default path `~/.config/tagtree/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let context_menu = config
        .context_menu
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(name, commands)| match name.parse::<NodeKind>() {
            Ok(kind) => Some((kind, commands)),
            Err(e) => {
                warn!(error = %e, "ignoring context menu entry");
                None
            }
        })
        .collect();

    ResolvedConfig {
        indent: config.indent.unwrap_or(defaults.indent),
        padding: config.padding.unwrap_or(defaults.padding),
        line_padding: config.line_padding.unwrap_or(defaults.line_padding),
        scroll_margin: config.scroll_margin.unwrap_or(defaults.scroll_margin),
        show_lines: config.show_lines.unwrap_or(defaults.show_lines),
        collapsed_marker: config.collapsed_marker.unwrap_or(defaults.collapsed_marker),
        text_color: config.text_color.unwrap_or(defaults.text_color),
        line_color: config.line_color.unwrap_or(defaults.line_color),
        use_color: defaults.use_color,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        context_menu,
    }
}

/// Parse a boolean-ish environment value.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TAGTREE_SHOW_LINES`: Override `show_lines` (`1`/`0`, `true`/`false`, `on`/`off`)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var(SHOW_LINES_ENV) {
        match parse_flag(&value) {
            Some(show) => config.show_lines = show,
            None => warn!(value = %value, "ignoring unparseable {SHOW_LINES_ENV}"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    show_lines_override: Option<bool>,
    indent_override: Option<i32>,
    color_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(show) = show_lines_override {
        config.show_lines = show;
    }

    if let Some(indent) = indent_override {
        config.indent = indent;
    }

    if let Some(color) = color_override {
        config.use_color = color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
