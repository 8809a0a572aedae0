//! Immutable style configuration passed into layout and rendering.

/// Geometry and display options for the tree.
///
/// Built once from configuration and passed by reference; changing any field
/// requires a relayout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStyle {
    /// Horizontal indentation per depth level.
    pub indent: i32,
    /// Padding between the tree and the left border.
    pub padding: i32,
    /// Extra vertical space added to each text line.
    pub line_padding: i32,
    /// Extra room below the document before scrolling kicks in.
    pub scroll_margin: i32,
    /// Draw connecting lines between parents and children.
    pub show_lines: bool,
    /// Text appended to collapsed nodes that have children.
    pub collapsed_marker: String,
}

impl Default for TreeStyle {
    /// Terminal defaults: one unit is one cell.
    fn default() -> Self {
        Self {
            indent: 2,
            padding: 1,
            line_padding: 0,
            scroll_margin: 1,
            show_lines: true,
            collapsed_marker: " [+]".to_string(),
        }
    }
}

impl TreeStyle {
    /// Pixel-surface defaults: 16px indent, 4px padding, 4px line padding,
    /// 8px scroll margin.
    pub fn pixel() -> Self {
        Self {
            indent: 16,
            padding: 4,
            line_padding: 4,
            scroll_margin: 8,
            show_lines: true,
            collapsed_marker: String::new(),
        }
    }

    /// Same style with connecting lines switched.
    pub fn with_lines(mut self, show_lines: bool) -> Self {
        self.show_lines = show_lines;
        self
    }

    /// X coordinate where text at `depth` starts.
    pub fn text_x(&self, depth: usize) -> i32 {
        self.padding + depth as i32 * self.indent
    }

    /// Width left for text at `depth` in a viewport `viewport_width` wide.
    pub fn available_width(&self, viewport_width: i32, depth: usize) -> i32 {
        (viewport_width - depth as i32 * self.indent - self.padding).max(0)
    }

    /// X coordinate at which the root column ends.
    pub fn root_end(&self) -> i32 {
        self.padding + self.indent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_x_grows_by_indent() {
        let style = TreeStyle::pixel();
        assert_eq!(style.text_x(0), 4);
        assert_eq!(style.text_x(2), 36);
    }

    #[test]
    fn available_width_never_negative() {
        let style = TreeStyle::pixel();
        assert_eq!(style.available_width(200, 0), 196);
        assert_eq!(style.available_width(200, 3), 148);
        assert_eq!(style.available_width(20, 5), 0);
    }

    #[test]
    fn text_x_plus_available_width_reaches_viewport_edge() {
        let style = TreeStyle::default();
        for depth in 0..5 {
            assert_eq!(style.text_x(depth) + style.available_width(80, depth), 80);
        }
    }

    #[test]
    fn root_end_is_first_indent_column() {
        assert_eq!(TreeStyle::default().root_end(), 3);
        assert_eq!(TreeStyle::pixel().root_end(), 20);
    }
}
