//! [`Surface`] over a ratatui [`Buffer`].
//!
//! One cell is one unit. Connecting lines are drawn with box-drawing glyphs
//! and merged with what is already in the cell, so a trunk passing a
//! corner turns it into a tee.

use crate::view_state::surface::{CellMeasure, Surface, TextMeasure};
use crate::view_state::types::{Extent, Point, Rect as ViewRect};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

const VERTICAL: &str = "│";
const HORIZONTAL: &str = "─";
const CORNER: &str = "└";
const TEE: &str = "├";

/// Paints into `area` of a buffer. Coordinates are relative to `area`.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    text_style: Style,
    line_style: Style,
}

impl<'a> BufferSurface<'a> {
    /// Create a surface for `area` of `buf`.
    pub fn new(buf: &'a mut Buffer, area: Rect, text_style: Style, line_style: Style) -> Self {
        Self {
            buf,
            area,
            text_style,
            line_style,
        }
    }

    /// Buffer position of a surface point, if it lies inside the area.
    fn cell_position(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let inside = x >= 0
            && y >= 0
            && x < i32::from(self.area.width)
            && y < i32::from(self.area.height);
        inside.then(|| (self.area.x + x as u16, self.area.y + y as u16))
    }

    fn merge(&mut self, x: i32, y: i32, glyph: impl FnOnce(&str) -> &'static str) {
        let Some(position) = self.cell_position(x, y) else {
            return;
        };
        let style = self.line_style;
        if let Some(cell) = self.buf.cell_mut(position) {
            let next = glyph(cell.symbol());
            cell.set_symbol(next).set_style(style);
        }
    }

    fn vertical(&mut self, x: i32, top: i32, bottom: i32) {
        for y in top.max(0)..bottom {
            self.merge(x, y, |current| match current {
                CORNER | TEE => TEE,
                _ => VERTICAL,
            });
        }
        self.merge(x, bottom, |current| match current {
            VERTICAL | TEE => TEE,
            _ => CORNER,
        });
    }

    fn horizontal(&mut self, y: i32, left: i32, right: i32) {
        for x in left.max(0)..=right {
            self.merge(x, y, |current| match current {
                CORNER if x == left => CORNER,
                TEE if x == left => TEE,
                _ => HORIZONTAL,
            });
        }
    }
}

impl TextMeasure for BufferSurface<'_> {
    fn text_extent(&self, text: &str) -> Extent {
        CellMeasure.text_extent(text)
    }
}

impl Surface for BufferSurface<'_> {
    fn draw_text(&mut self, rect: ViewRect, text: &str) {
        let Some((x, y)) = self.cell_position(rect.x, rect.y) else {
            return;
        };
        let room = i32::from(self.area.width) - rect.x;
        let width = rect.width.min(room).max(0) as usize;
        self.buf.set_stringn(x, y, text, width, self.text_style);
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        if from.x == to.x {
            let (top, bottom) = (from.y.min(to.y), from.y.max(to.y));
            if bottom >= 0 {
                self.vertical(from.x, top, bottom);
            }
        } else if from.y == to.y {
            let (left, right) = (from.x.min(to.x), from.x.max(to.x));
            self.horizontal(from.y, left, right);
        }
    }
}
