//! Expand/collapse keyboard action handler.
//!
//! Pure functions that transform AppState in response to expand/collapse actions.

use crate::model::KeyAction;
use crate::state::AppState;
use tracing::warn;

/// Handle an expand/collapse keyboard action.
///
/// `ToggleExpand` flips the focused node, or the first row if nothing is
/// focused. Nodes without children are left alone.
pub fn handle_expand_action(mut state: AppState, action: KeyAction) -> AppState {
    match action {
        KeyAction::ToggleExpand => {
            let target = state.focused().or_else(|| state.tree().roots().first().copied());
            let Some(target) = target else {
                return state;
            };
            let has_children = state
                .tree()
                .get(target)
                .is_ok_and(|node| node.has_children());
            if has_children {
                if let Err(e) = state.toggle_node(target) {
                    warn!(error = %e, "toggle failed");
                }
            }
            if state.focused().is_none() {
                state.set_focus(Some(target));
            }
        }
        KeyAction::ExpandAll => state.expand_all(),
        KeyAction::CollapseAll => state.collapse_all(),
        _ => {}
    }
    state
}

#[cfg(test)]
#[path = "expand_handler_tests.rs"]
mod tests;
