//! Context menu input handling (pure state transitions).
//!
//! All functions are no-ops unless [`Mode::Menu`] is active.

use crate::state::{AppState, Mode};

/// Highlight the next action row.
pub fn handle_menu_next(mut state: AppState) -> AppState {
    if let Mode::Menu(menu) = &mut state.mode {
        menu.select_next();
    }
    state
}

/// Highlight the previous action row.
pub fn handle_menu_prev(mut state: AppState) -> AppState {
    if let Mode::Menu(menu) = &mut state.mode {
        menu.select_prev();
    }
    state
}

/// Run the highlighted action and close the menu.
///
/// A menu with no actions just closes.
pub fn handle_menu_confirm(mut state: AppState) -> AppState {
    match std::mem::take(&mut state.mode) {
        Mode::Menu(menu) => {
            if let Some(action) = menu.selected_action() {
                state.run_command(action.command, menu.target);
            }
        }
        other => state.mode = other,
    }
    state
}

/// Close the menu without running anything.
pub fn handle_menu_cancel(mut state: AppState) -> AppState {
    if matches!(state.mode, Mode::Menu(_)) {
        state.mode = Mode::Browse;
    }
    state
}

/// Click on menu row `row`: action rows run, title and separator rows are
/// ignored.
pub fn handle_menu_click(mut state: AppState, row: usize) -> AppState {
    let Mode::Menu(menu) = &mut state.mode else {
        return state;
    };
    if menu.entries.get(row).and_then(|e| e.action()).is_none() {
        return state;
    }
    menu.selected = row;
    handle_menu_confirm(state)
}
