//! Visible range calculation result

use super::layout::TreeLayout;
use crate::model::NodeIndex;

/// Range of display rows visible in the current viewport.
///
/// Computed via binary search on the layout's row prefix sums.
///
/// # Invariants
/// - `start_row <= end_row`
/// - `end_row <= layout.len()`
/// - Every row in range has some portion inside `[offset, offset + viewport_height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    /// First visible row (inclusive).
    pub start_row: usize,
    /// Last visible row (exclusive).
    pub end_row: usize,
    /// Scroll offset the range was computed for.
    pub offset: i32,
    /// Viewport height the range was computed for.
    pub viewport_height: i32,
}

impl VisibleRange {
    /// Rows of `layout` intersecting the band `[offset, offset + viewport_height)`.
    pub fn compute(layout: &TreeLayout, offset: i32, viewport_height: i32) -> Self {
        let offset = offset.max(0);
        let viewport_height = viewport_height.max(0);
        let empty = Self {
            start_row: 0,
            end_row: 0,
            offset,
            viewport_height,
        };
        if viewport_height == 0 {
            return empty;
        }
        let Some(start_row) = layout.row_at(offset) else {
            return empty;
        };
        let last = offset + viewport_height - 1;
        let end_row = layout.row_at(last).map_or(layout.len(), |row| row + 1);
        Self {
            start_row,
            end_row,
            offset,
            viewport_height,
        }
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.end_row - self.start_row
    }

    /// True if no row is visible.
    pub fn is_empty(&self) -> bool {
        self.start_row == self.end_row
    }

    /// Iterate visible row numbers.
    pub fn rows(&self) -> impl Iterator<Item = usize> {
        self.start_row..self.end_row
    }

    /// Visible nodes in display order.
    pub fn nodes<'a>(&self, layout: &'a TreeLayout) -> &'a [NodeIndex] {
        let end = self.end_row.min(layout.len());
        &layout.order()[self.start_row.min(end)..end]
    }

    /// True if `row` is visible.
    pub fn contains(&self, row: usize) -> bool {
        row >= self.start_row && row < self.end_row
    }
}
