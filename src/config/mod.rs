//! Configuration module.
//!
//! - `loader`: TOML config file, env and CLI precedence
//! - `keybindings`: key event → [`KeyAction`](crate::model::KeyAction)

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{ConfigError, ConfigFile, ResolvedConfig};
