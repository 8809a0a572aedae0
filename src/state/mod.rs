//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod expand_handler;
pub mod menu_handler;
pub mod mouse_handler;
pub mod rename_handler;
pub mod scroll_handler;

// Re-export for convenience
pub use action_handler::handle_key_action;
pub use app_state::{AppState, MenuState, Mode, RenameState};
pub use expand_handler::handle_expand_action;
pub use mouse_handler::{handle_click, handle_wheel, PointerButton};
pub use scroll_handler::handle_scroll_action;
