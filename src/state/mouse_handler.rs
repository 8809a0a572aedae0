//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to pointer input.
//! Points are relative to the tree viewport's top-left corner.

use crate::state::{AppState, Mode};
use crate::view_state::scroll::ScrollDelta;
use crate::view_state::types::Point;
use tracing::warn;

/// Which button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button: focus, and toggle nodes with children.
    Primary,
    /// Right button: open the context menu.
    Secondary,
}

/// Handle a button press at `point`.
///
/// While a menu or the rename input is open, any click in the tree closes
/// it instead. Clicks that hit no node do nothing.
pub fn handle_click(mut state: AppState, point: Point, button: PointerButton) -> AppState {
    if state.mode != Mode::Browse {
        state.mode = Mode::Browse;
        return state;
    }

    let Some(node) = state.hit_test(point).node() else {
        return state;
    };

    match button {
        PointerButton::Primary => {
            state.set_focus(Some(node));
            let has_children = state.tree().get(node).is_ok_and(|n| n.has_children());
            if has_children {
                if let Err(e) = state.toggle_node(node) {
                    warn!(error = %e, "toggle on click failed");
                }
            }
        }
        PointerButton::Secondary => state.open_menu(node),
    }
    state
}

/// Handle one wheel notch; `up` scrolls towards the top. One line per notch.
pub fn handle_wheel(mut state: AppState, up: bool) -> AppState {
    state.scroll_by(if up {
        ScrollDelta::WheelUp
    } else {
        ScrollDelta::WheelDown
    });
    state
}

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
