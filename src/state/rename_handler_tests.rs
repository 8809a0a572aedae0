//! Tests for rename input handling.

use super::*;
use crate::model::{NodeIndex, NodeInit, NodeKind, Tree};
use crate::view_state::context_menu::ContextMenu;
use crate::view_state::style::TreeStyle;

fn renaming(tag: &str) -> (AppState, NodeIndex) {
    let mut tree = Tree::new();
    let node = tree
        .add_node(tag, NodeIndex::ROOT, NodeKind::Leaf, NodeInit::default())
        .unwrap();
    let mut state = AppState::new(tree, TreeStyle::default(), ContextMenu::default());
    state.set_viewport(40, 10);
    state.begin_rename(node);
    (state, node)
}

fn buffer(state: &AppState) -> (&str, usize) {
    match &state.mode {
        Mode::Renaming(r) => (r.buffer.as_str(), r.cursor),
        other => panic!("expected rename mode, got {other:?}"),
    }
}

#[test]
fn typing_appends_at_end() {
    let (state, _) = renaming("ab");
    let state = handle_char_input(state, 'c');
    assert_eq!(buffer(&state), ("abc", 3));
}

#[test]
fn typing_inserts_at_cursor() {
    let (state, _) = renaming("ac");
    let state = handle_cursor_left(state);
    let state = handle_char_input(state, 'b');
    assert_eq!(buffer(&state), ("abc", 2));
}

#[test]
fn backspace_at_start_is_noop() {
    let (state, _) = renaming("x");
    let state = handle_cursor_home(state);
    let state = handle_backspace(state);
    assert_eq!(buffer(&state), ("x", 0));
}

#[test]
fn backspace_removes_multibyte_char() {
    let (state, _) = renaming("naïve");
    let state = handle_cursor_left(state);
    let state = handle_cursor_left(state);
    let state = handle_backspace(state);
    assert_eq!(buffer(&state), ("nave", 2));
}

#[test]
fn delete_removes_char_under_cursor() {
    let (state, _) = renaming("abc");
    let state = handle_cursor_home(state);
    let state = handle_delete(state);
    assert_eq!(buffer(&state), ("bc", 0));
    let state = handle_cursor_end(state);
    let state = handle_delete(state);
    assert_eq!(buffer(&state), ("bc", 2));
}

#[test]
fn cursor_right_saturates() {
    let (state, _) = renaming("ab");
    let state = handle_cursor_right(state);
    assert_eq!(buffer(&state), ("ab", 2));
}

#[test]
fn submit_renames_node() {
    let (state, node) = renaming("Old");
    let state = handle_backspace(state);
    let state = handle_backspace(state);
    let state = handle_backspace(state);
    let state = "New name".chars().fold(state, handle_char_input);
    let state = submit_rename(state);
    assert_eq!(state.mode, Mode::Browse);
    assert_eq!(state.tree().get(node).unwrap().tag(), "New name");
}

#[test]
fn cancel_keeps_old_tag() {
    let (state, node) = renaming("Keep");
    let state = handle_char_input(state, '!');
    let state = cancel_rename(state);
    assert_eq!(state.mode, Mode::Browse);
    assert_eq!(state.tree().get(node).unwrap().tag(), "Keep");
}

#[test]
fn submit_for_deleted_node_reports_status() {
    let (mut state, node) = renaming("Gone");
    state.mode = Mode::Browse;
    state.delete_node(node).unwrap();
    state.mode = Mode::Renaming(RenameState::new(node, "Gone"));
    let state = submit_rename(state);
    assert_eq!(state.mode, Mode::Browse);
    assert_eq!(state.status.as_deref(), Some("Node #1 not found"));
}
