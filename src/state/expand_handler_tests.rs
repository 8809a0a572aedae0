//! Tests for expand/collapse handler.

use super::*;
use crate::model::{NodeIndex, NodeInit, NodeKind, Tree};
use crate::view_state::context_menu::ContextMenu;
use crate::view_state::style::TreeStyle;

/// Root{Child{Grandchild}}, Sibling.
fn create_test_state() -> (AppState, [NodeIndex; 4]) {
    let mut tree = Tree::new();
    let init = NodeInit::default();
    let root = tree.add_node("Root", NodeIndex::ROOT, NodeKind::DocumentRoot, init).unwrap();
    let child = tree.add_node("Child", root, NodeKind::Event, init).unwrap();
    let grandchild = tree.add_node("Grandchild", child, NodeKind::Variable, init).unwrap();
    let sibling = tree.add_node("Sibling", NodeIndex::ROOT, NodeKind::Leaf, init).unwrap();
    let mut state = AppState::new(tree, TreeStyle::default(), ContextMenu::default());
    state.set_viewport(40, 10);
    (state, [root, child, grandchild, sibling])
}

#[test]
fn toggle_expand_flips_focused_node() {
    let (mut state, [_, child, _, _]) = create_test_state();
    state.set_focus(Some(child));

    let state = handle_expand_action(state, KeyAction::ToggleExpand);
    assert!(!state.tree().get(child).unwrap().is_expanded());
    assert_eq!(state.layout().unwrap().len(), 3);

    let state = handle_expand_action(state, KeyAction::ToggleExpand);
    assert!(state.tree().get(child).unwrap().is_expanded());
    assert_eq!(state.layout().unwrap().len(), 4);
}

#[test]
fn toggle_expand_without_focus_uses_first_root() {
    let (state, [root, _, _, _]) = create_test_state();
    let state = handle_expand_action(state, KeyAction::ToggleExpand);
    assert!(!state.tree().get(root).unwrap().is_expanded());
    assert_eq!(state.focused(), Some(root));
}

#[test]
fn toggle_expand_on_leaf_does_nothing() {
    let (mut state, [_, _, grandchild, _]) = create_test_state();
    state.set_focus(Some(grandchild));
    let revision = state.tree().revision();
    let state = handle_expand_action(state, KeyAction::ToggleExpand);
    assert_eq!(state.tree().revision(), revision);
}

#[test]
fn toggle_expand_on_empty_tree_is_noop() {
    let state = AppState::new(Tree::new(), TreeStyle::default(), ContextMenu::default());
    let state = handle_expand_action(state, KeyAction::ToggleExpand);
    assert_eq!(state.focused(), None);
}

#[test]
fn collapse_all_then_expand_all() {
    let (state, _) = create_test_state();
    let state = handle_expand_action(state, KeyAction::CollapseAll);
    assert_eq!(state.layout().unwrap().len(), 2);
    let state = handle_expand_action(state, KeyAction::ExpandAll);
    assert_eq!(state.layout().unwrap().len(), 4);
}
