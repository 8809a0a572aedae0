//! Rename input widget for editing a node's tag.

use crate::state::RenameState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Rename input widget.
/// Renders the buffer with a block cursor at the insertion point.
pub struct RenameInput<'a> {
    rename: &'a RenameState,
}

impl<'a> RenameInput<'a> {
    /// Create new RenameInput widget.
    pub fn new(rename: &'a RenameState) -> Self {
        Self { rename }
    }
}

impl Widget for RenameInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let before: String = self.rename.buffer.chars().take(self.rename.cursor).collect();
        let mut after = self.rename.buffer.chars().skip(self.rename.cursor);
        let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
        let after_text: String = after.collect();

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(
                cursor_char,
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(after_text),
        ]);

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Rename (Enter to apply, Esc to cancel)"),
            )
            .render(area, buf);
    }
}
