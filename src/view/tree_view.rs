//! Tree widget: paints the visible band of the layout through
//! [`BufferSurface`] and highlights the focused node.

use super::styles::TreeColors;
use super::surface::BufferSurface;
use crate::state::AppState;
use crate::view_state::renderer::{paint, RenderStats};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tracing::trace;

/// Renders [`AppState`]'s tree.
///
/// Expects [`AppState::refresh`] to have run for the current viewport; with
/// a stale layout nothing is drawn.
pub struct TreeView<'a> {
    state: &'a AppState,
    colors: &'a TreeColors,
}

impl<'a> TreeView<'a> {
    /// Create the widget.
    pub fn new(state: &'a AppState, colors: &'a TreeColors) -> Self {
        Self { state, colors }
    }

    /// Paint and report what was drawn.
    pub fn render_with_stats(self, area: Rect, buf: &mut Buffer) -> RenderStats {
        let Some(layout) = self.state.layout() else {
            return RenderStats::default();
        };
        let offset = self.state.offset();
        let viewport_height = i32::from(area.height);

        let mut surface = BufferSurface::new(buf, area, self.colors.text, self.colors.lines);
        let stats = paint(&mut surface, self.state.tree(), layout, offset, viewport_height);
        trace!(?stats, "painted tree");

        let focused = self.state.focused().and_then(|f| layout.get(f));
        if let Some(node) = focused {
            let line_height = layout.line_height();
            for i in 0..node.lines.len() as i32 {
                let top = node.rect.y + i * line_height - offset;
                if top < 0 || top >= viewport_height || node.rect.x >= i32::from(area.width) {
                    continue;
                }
                let x = area.x + node.rect.x.max(0) as u16;
                let width = (node.rect.width.max(1) as u16).min(area.right().saturating_sub(x));
                buf.set_style(
                    Rect::new(x, area.y + top as u16, width, 1),
                    self.colors.focused,
                );
            }
        }
        stats
    }
}

impl Widget for TreeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_with_stats(area, buf);
    }
}
