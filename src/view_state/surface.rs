//! Drawing-surface capabilities consumed by layout and rendering.
//!
//! The core never talks to a graphics API directly. Layout only needs
//! [`TextMeasure`]; the renderer needs a full [`Surface`].

use super::types::{Extent, Point, Rect};
use unicode_width::UnicodeWidthStr;

/// Measures text in surface units.
pub trait TextMeasure {
    /// Width and height of `text` rendered on one line.
    fn text_extent(&self, text: &str) -> Extent;
}

/// A surface the renderer can paint on.
///
/// Coordinates are viewport-relative; implementations clip to their bounds.
pub trait Surface: TextMeasure {
    /// Draw `text` with its top-left corner at the rectangle's origin,
    /// clipped to the rectangle.
    fn draw_text(&mut self, rect: Rect, text: &str);

    /// Draw a straight line between two points, inclusive.
    fn draw_line(&mut self, from: Point, to: Point);
}

/// Fixed-advance measure: every character is `advance` wide.
///
/// Useful for monospace surfaces and for deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMeasure {
    /// Width of one character.
    pub advance: i32,
    /// Height of one line of text.
    pub glyph_height: i32,
}

impl MonospaceMeasure {
    /// Create a measure.
    pub const fn new(advance: i32, glyph_height: i32) -> Self {
        Self {
            advance,
            glyph_height,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_extent(&self, text: &str) -> Extent {
        Extent::new(text.chars().count() as i32 * self.advance, self.glyph_height)
    }
}

/// Terminal cell measure: display width from `unicode-width`, one row tall.
///
/// Wide glyphs (CJK, most emoji) count as two cells, combining marks as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn text_extent(&self, text: &str) -> Extent {
        Extent::new(UnicodeWidthStr::width(text) as i32, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_measure_uses_display_width() {
        assert_eq!(CellMeasure.text_extent("abc"), Extent::new(3, 1));
        assert_eq!(CellMeasure.text_extent("日本"), Extent::new(4, 1));
        assert_eq!(CellMeasure.text_extent(""), Extent::new(0, 1));
    }

    #[test]
    fn monospace_counts_chars_not_bytes() {
        let m = MonospaceMeasure::new(10, 16);
        assert_eq!(m.text_extent("abc"), Extent::new(30, 16));
        assert_eq!(m.text_extent("äöü"), Extent::new(30, 16));
        assert_eq!(m.text_extent(""), Extent::new(0, 16));
    }
}
