//! Key action dispatch for browse mode.
//!
//! Routes a [`KeyAction`] to the handler that owns it. Scroll and
//! expand/collapse actions go to their own handlers; the rest act on the
//! focused node directly.

use crate::model::KeyAction;
use crate::state::expand_handler::handle_expand_action;
use crate::state::scroll_handler::handle_scroll_action;
use crate::state::AppState;
use crate::view_state::context_menu::CommandId;

/// Apply a key action in browse mode.
///
/// Actions that need a target (menu, delete, rename) do nothing when no
/// node is focused.
pub fn handle_key_action(mut state: AppState, action: KeyAction) -> AppState {
    if action.is_scroll() {
        return handle_scroll_action(state, action);
    }

    match action {
        KeyAction::ToggleExpand | KeyAction::ExpandAll | KeyAction::CollapseAll => {
            return handle_expand_action(state, action);
        }
        KeyAction::NextNode => state.focus_next(),
        KeyAction::PrevNode => state.focus_prev(),
        KeyAction::OpenMenu => {
            if let Some(focused) = state.focused() {
                state.open_menu(focused);
            }
        }
        KeyAction::DeleteNode => {
            if let Some(focused) = state.focused() {
                state.run_command(CommandId::DeleteNode, focused);
            }
        }
        KeyAction::RenameNode => {
            if let Some(focused) = state.focused() {
                state.begin_rename(focused);
            }
        }
        KeyAction::ToggleLines => state.toggle_lines(),
        KeyAction::Help => state.help_visible = !state.help_visible,
        KeyAction::Save => state.save(),
        KeyAction::Reload => state.reload(),
        KeyAction::Quit => state.should_quit = true,
        _ => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeIndex, NodeInit, NodeKind, Tree};
    use crate::state::Mode;
    use crate::view_state::context_menu::ContextMenu;
    use crate::view_state::style::TreeStyle;

    fn create_test_state() -> (AppState, NodeIndex, NodeIndex) {
        let mut tree = Tree::new();
        let init = NodeInit::default();
        let root = tree.add_node("Root", NodeIndex::ROOT, NodeKind::Event, init).unwrap();
        let child = tree.add_node("Child", root, NodeKind::Leaf, init).unwrap();
        let mut state = AppState::new(tree, TreeStyle::default(), ContextMenu::default());
        state.set_viewport(40, 10);
        (state, root, child)
    }

    #[test]
    fn quit_sets_flag() {
        let (state, _, _) = create_test_state();
        let state = handle_key_action(state, KeyAction::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn help_toggles() {
        let (state, _, _) = create_test_state();
        let state = handle_key_action(state, KeyAction::Help);
        assert!(state.help_visible);
        let state = handle_key_action(state, KeyAction::Help);
        assert!(!state.help_visible);
    }

    #[test]
    fn next_node_then_delete_removes_focused() {
        let (state, root, child) = create_test_state();
        let state = handle_key_action(state, KeyAction::NextNode);
        let state = handle_key_action(state, KeyAction::NextNode);
        assert_eq!(state.focused(), Some(child));
        let state = handle_key_action(state, KeyAction::DeleteNode);
        assert!(!state.tree().contains(child));
        assert_eq!(state.focused(), Some(root));
    }

    #[test]
    fn targeted_actions_need_focus() {
        let (state, _, _) = create_test_state();
        let state = handle_key_action(state, KeyAction::OpenMenu);
        assert_eq!(state.mode, Mode::Browse);
        let state = handle_key_action(state, KeyAction::DeleteNode);
        assert_eq!(state.tree().len(), 2);
        let state = handle_key_action(state, KeyAction::RenameNode);
        assert_eq!(state.mode, Mode::Browse);
    }

    #[test]
    fn open_menu_and_rename_use_focus() {
        let (mut state, root, _) = create_test_state();
        state.set_focus(Some(root));
        let state = handle_key_action(state, KeyAction::OpenMenu);
        assert!(matches!(&state.mode, Mode::Menu(menu) if menu.target == root));

        let mut state = state;
        state.mode = Mode::Browse;
        let state = handle_key_action(state, KeyAction::RenameNode);
        assert!(matches!(&state.mode, Mode::Renaming(r) if r.buffer == "Root"));
    }

    #[test]
    fn toggle_lines_flips_style() {
        let (state, _, _) = create_test_state();
        let state = handle_key_action(state, KeyAction::ToggleLines);
        assert!(!state.style().show_lines);
    }

    #[test]
    fn scroll_actions_are_routed() {
        let (state, _, _) = create_test_state();
        let state = handle_key_action(state, KeyAction::ScrollToBottom);
        assert_eq!(state.offset(), 0, "two rows fit in ten");
    }
}
