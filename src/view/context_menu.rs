//! Context menu popup.

use super::constants::MENU_MIN_WIDTH;
use super::styles::TreeColors;
use crate::state::MenuState;
use crate::view_state::context_menu::MenuEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Where the popup goes: just below-right of `anchor`, moved back inside
/// `bounds` if it would overflow.
pub fn menu_area(anchor: (u16, u16), menu: &MenuState, bounds: Rect) -> Rect {
    let content_width = menu
        .entries
        .iter()
        .map(|e| match e {
            MenuEntry::Title(title) => title.width(),
            MenuEntry::Separator => 0,
            MenuEntry::Action(action) => action.label.width(),
        })
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + 4)
        .max(MENU_MIN_WIDTH)
        .min(bounds.width);
    let height = (menu.entries.len() as u16 + 2).min(bounds.height);

    let x = anchor.0.min(bounds.right().saturating_sub(width)).max(bounds.x);
    let y = (anchor.1 + 1)
        .min(bounds.bottom().saturating_sub(height))
        .max(bounds.y);
    Rect::new(x, y, width, height)
}

/// Menu row under a screen position inside `area`, if any.
pub fn menu_row_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    );
    let inside = column >= inner.x
        && column < inner.right()
        && row >= inner.y
        && row < inner.bottom();
    inside.then(|| usize::from(row - inner.y))
}

/// Popup listing a [`MenuState`]'s rows.
pub struct ContextMenuPopup<'a> {
    menu: &'a MenuState,
    colors: &'a TreeColors,
}

impl<'a> ContextMenuPopup<'a> {
    /// Create the widget.
    pub fn new(menu: &'a MenuState, colors: &'a TreeColors) -> Self {
        Self { menu, colors }
    }
}

impl Widget for ContextMenuPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let separator_width = area.width.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .menu
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                MenuEntry::Title(title) => Line::styled(title.clone(), self.colors.menu_disabled),
                MenuEntry::Separator => {
                    Line::styled("─".repeat(separator_width), self.colors.menu_disabled)
                }
                MenuEntry::Action(action) => {
                    let style = if i == self.menu.selected {
                        self.colors.menu_selected
                    } else {
                        Style::default()
                    };
                    Line::styled(action.label, style)
                }
            })
            .collect();

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
