//! Screen layout: tree pane, optional rename input, status bar, popups.

use super::constants::{RENAME_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::context_menu::{menu_area, ContextMenuPopup};
use super::help::render_help_overlay;
use super::rename_input::RenameInput;
use super::styles::TreeColors;
use super::tree_view::TreeView;
use crate::state::{AppState, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Tree viewport.
    pub tree: Rect,
    /// Rename input, present while renaming.
    pub rename: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

/// Split the frame for the current mode.
pub fn calculate_areas(frame_area: Rect, state: &AppState) -> ScreenAreas {
    let renaming = matches!(state.mode, Mode::Renaming(_));
    let input_height = if renaming { RENAME_INPUT_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(input_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    ScreenAreas {
        tree: chunks[0],
        rename: renaming.then_some(chunks[1]),
        status: chunks[2],
    }
}

/// Screen position to open the context menu at: the target's first row, or
/// the tree's top-left corner if the target is scrolled out of view.
pub fn menu_anchor(state: &AppState, tree_area: Rect) -> (u16, u16) {
    let Mode::Menu(menu) = &state.mode else {
        return (tree_area.x, tree_area.y);
    };
    let row = state
        .layout()
        .and_then(|l| l.get(menu.target))
        .map(|n| (n.rect.x, n.rect.y - state.offset()))
        .filter(|&(_, y)| y >= 0 && y < i32::from(tree_area.height));
    match row {
        Some((x, y)) => (
            tree_area.x + x.clamp(0, i32::from(tree_area.width)) as u16,
            tree_area.y + y as u16,
        ),
        None => (tree_area.x, tree_area.y),
    }
}

/// Render a full frame. Returns the context menu's area if one is open.
pub fn render_layout(frame: &mut Frame, state: &AppState, colors: &TreeColors) -> Option<Rect> {
    let areas = calculate_areas(frame.area(), state);

    frame.render_widget(TreeView::new(state, colors), areas.tree);

    if let (Mode::Renaming(rename), Some(area)) = (&state.mode, areas.rename) {
        frame.render_widget(RenameInput::new(rename), area);
    }

    render_status_bar(frame, areas.status, state);

    let mut menu_rect = None;
    if let Mode::Menu(menu) = &state.mode {
        let area = menu_area(menu_anchor(state, areas.tree), menu, areas.tree);
        frame.render_widget(ContextMenuPopup::new(menu, colors), area);
        menu_rect = Some(area);
    }

    if state.help_visible {
        render_help_overlay(frame);
    }
    menu_rect
}

fn build_status_text(state: &AppState) -> String {
    let file = state
        .file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "[no file]".to_string());
    let mut text = format!(" {} | {} nodes", file, state.tree().len());
    if let Some(status) = &state.status {
        text.push_str(" | ");
        text.push_str(status);
    }
    text.push_str(" | ?: help  q: quit");
    text
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(Line::from(build_status_text(state)))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(paragraph, area);
}
