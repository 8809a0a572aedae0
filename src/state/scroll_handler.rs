//! Vertical scrolling keyboard action handler.
//!
//! Pure functions that transform AppState in response to scroll actions.

use crate::model::KeyAction;
use crate::state::AppState;
use crate::view_state::scroll::ScrollDelta;

/// Map a scroll key action to the controller's delta. `None` for
/// non-scroll actions.
pub fn scroll_delta(action: KeyAction) -> Option<ScrollDelta> {
    match action {
        KeyAction::ScrollUp => Some(ScrollDelta::LineUp),
        KeyAction::ScrollDown => Some(ScrollDelta::LineDown),
        KeyAction::PageUp => Some(ScrollDelta::PageUp),
        KeyAction::PageDown => Some(ScrollDelta::PageDown),
        KeyAction::ScrollToTop => Some(ScrollDelta::Top),
        KeyAction::ScrollToBottom => Some(ScrollDelta::Bottom),
        _ => None,
    }
}

/// Handle a scroll keyboard action.
///
/// Returns the state with the offset moved and clamped to the scroll range.
/// Non-scroll actions pass through unchanged.
pub fn handle_scroll_action(mut state: AppState, action: KeyAction) -> AppState {
    if let Some(delta) = scroll_delta(action) {
        state.scroll_by(delta);
    }
    state
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
