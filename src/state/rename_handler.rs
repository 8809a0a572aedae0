//! Rename input handling (pure state transitions).
//!
//! Edits the [`RenameState`] buffer while [`Mode::Renaming`] is active.
//! The cursor counts characters, so multi-byte text edits cleanly.

use crate::state::{AppState, Mode, RenameState};
use tracing::warn;

fn edit(mut state: AppState, f: impl FnOnce(&mut RenameState)) -> AppState {
    if let Mode::Renaming(rename) = &mut state.mode {
        f(rename);
    }
    state
}

/// Insert `ch` at the cursor and advance.
pub fn handle_char_input(state: AppState, ch: char) -> AppState {
    edit(state, |r| {
        let at = r.byte_cursor();
        r.buffer.insert(at, ch);
        r.cursor += 1;
    })
}

/// Delete the character before the cursor.
pub fn handle_backspace(state: AppState) -> AppState {
    edit(state, |r| {
        if r.cursor > 0 {
            r.cursor -= 1;
            let at = r.byte_cursor();
            r.buffer.remove(at);
        }
    })
}

/// Delete the character under the cursor.
pub fn handle_delete(state: AppState) -> AppState {
    edit(state, |r| {
        let at = r.byte_cursor();
        if at < r.buffer.len() {
            r.buffer.remove(at);
        }
    })
}

/// Move the cursor left, saturating at 0.
pub fn handle_cursor_left(state: AppState) -> AppState {
    edit(state, |r| r.cursor = r.cursor.saturating_sub(1))
}

/// Move the cursor right, saturating at the end.
pub fn handle_cursor_right(state: AppState) -> AppState {
    edit(state, |r| r.cursor = (r.cursor + 1).min(r.buffer.chars().count()))
}

/// Move the cursor to the start.
pub fn handle_cursor_home(state: AppState) -> AppState {
    edit(state, |r| r.cursor = 0)
}

/// Move the cursor to the end.
pub fn handle_cursor_end(state: AppState) -> AppState {
    edit(state, |r| r.cursor = r.buffer.chars().count())
}

/// Apply the buffer as the node's new tag and return to browse mode.
pub fn submit_rename(mut state: AppState) -> AppState {
    match std::mem::take(&mut state.mode) {
        Mode::Renaming(rename) => {
            if let Err(e) = state.rename_node(rename.target, &rename.buffer) {
                warn!(error = %e, "rename failed");
                state.status = Some(e.to_string());
            }
        }
        other => state.mode = other,
    }
    state
}

/// Drop the buffer and return to browse mode.
pub fn cancel_rename(mut state: AppState) -> AppState {
    if matches!(state.mode, Mode::Renaming(_)) {
        state.mode = Mode::Browse;
    }
    state
}

#[cfg(test)]
#[path = "rename_handler_tests.rs"]
mod tests;
