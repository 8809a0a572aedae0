//! Scroll virtualization - document height + viewport height → offset range.
//!
//! The controller never holds content. It tracks a single offset into
//! document space and keeps it inside `[0, max_offset]`.
//!
//! # Range rule
//! Scrolling is disabled (and the offset forced to 0) when
//! `viewport_height >= document_height + margin`. Otherwise
//! `max_offset = document_height + margin - viewport_height`.

use tracing::trace;

/// A scroll request from keyboard, mouse or scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDelta {
    /// Up by one line height.
    LineUp,
    /// Down by one line height.
    LineDown,
    /// Up by one viewport height.
    PageUp,
    /// Down by one viewport height.
    PageDown,
    /// Absolute thumb position.
    Thumb(i32),
    /// Jump to offset 0.
    Top,
    /// Jump to the maximum offset.
    Bottom,
    /// Mouse wheel notch up; one line.
    WheelUp,
    /// Mouse wheel notch down; one line.
    WheelDown,
}

/// Result of a range update, handed to the host so it can configure its
/// scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollRange {
    /// False when the whole document fits.
    pub enabled: bool,
    /// Largest valid offset (0 when disabled).
    pub max_offset: i32,
    /// Thumb size: the viewport height.
    pub page: i32,
    /// Offset after clamping.
    pub offset: i32,
}

/// Scroll state for one tree view.
#[derive(Debug, Clone)]
pub struct ScrollController {
    document_height: i32,
    viewport_height: i32,
    offset: i32,
    margin: i32,
    line_height: i32,
    range: ScrollRange,
    updating: bool,
}

impl ScrollController {
    /// Create a controller with no content.
    pub fn new(margin: i32, line_height: i32) -> Self {
        Self {
            document_height: 0,
            viewport_height: 0,
            offset: 0,
            margin: margin.max(0),
            line_height: line_height.max(1),
            range: ScrollRange::default(),
            updating: false,
        }
    }

    /// Record a new document height (from a layout pass). Call
    /// [`update_range`](Self::update_range) afterwards.
    pub fn set_document_height(&mut self, height: i32) {
        self.document_height = height.max(0);
    }

    /// Record a new viewport height without recomputing the range.
    pub fn set_viewport_height(&mut self, height: i32) {
        self.viewport_height = height.max(0);
    }

    /// Change the line step.
    pub fn set_line_height(&mut self, line_height: i32) {
        self.line_height = line_height.max(1);
    }

    /// Change the extra room below the document.
    pub fn set_margin(&mut self, margin: i32) {
        self.margin = margin.max(0);
    }

    /// Recompute the range and clamp the offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagtree::view_state::scroll::ScrollController;
    ///
    /// let mut scroll = ScrollController::new(8, 20);
    /// scroll.set_viewport_height(400);
    /// scroll.set_document_height(1000);
    /// scroll.update_range();
    /// scroll.apply_delta(tagtree::view_state::scroll::ScrollDelta::Bottom);
    /// assert_eq!(scroll.offset(), 608);
    ///
    /// scroll.set_document_height(380);
    /// let range = scroll.update_range();
    /// assert!(!range.enabled);
    /// assert_eq!(scroll.offset(), 0);
    /// ```
    pub fn update_range(&mut self) -> ScrollRange {
        self.update_range_with(|_, _| {})
    }

    /// Recompute the range, then hand it to `publish` while the re-entrancy
    /// guard is held.
    ///
    /// Reconfiguring a host scrollbar can itself report a viewport resize;
    /// [`handle_viewport_resize`](Self::handle_viewport_resize) calls made
    /// from inside `publish` are ignored.
    pub fn update_range_with<F>(&mut self, publish: F) -> ScrollRange
    where
        F: FnOnce(&mut Self, ScrollRange),
    {
        self.updating = true;
        let range = self.compute_range();
        self.range = range;
        self.offset = range.offset;
        publish(self, range);
        self.updating = false;
        range
    }

    fn compute_range(&self) -> ScrollRange {
        let content = self.document_height + self.margin;
        if self.viewport_height >= content {
            ScrollRange {
                enabled: false,
                max_offset: 0,
                page: self.viewport_height,
                offset: 0,
            }
        } else {
            let max_offset = content - self.viewport_height;
            ScrollRange {
                enabled: true,
                max_offset,
                page: self.viewport_height,
                offset: self.offset.clamp(0, max_offset),
            }
        }
    }

    /// React to a viewport size change reported by the host.
    ///
    /// Returns false (and changes nothing) while a range update is in
    /// progress.
    pub fn handle_viewport_resize(&mut self, height: i32) -> bool {
        if self.updating {
            trace!(height, "viewport resize ignored during range update");
            return false;
        }
        self.viewport_height = height.max(0);
        self.update_range();
        true
    }

    /// Apply a scroll request and return the new offset.
    pub fn apply_delta(&mut self, delta: ScrollDelta) -> i32 {
        let target = match delta {
            ScrollDelta::LineUp | ScrollDelta::WheelUp => self.offset - self.line_height,
            ScrollDelta::LineDown | ScrollDelta::WheelDown => self.offset + self.line_height,
            ScrollDelta::PageUp => self.offset - self.viewport_height,
            ScrollDelta::PageDown => self.offset + self.viewport_height,
            ScrollDelta::Thumb(pos) => pos,
            ScrollDelta::Top => 0,
            ScrollDelta::Bottom => self.range.max_offset,
        };
        self.offset = target.clamp(0, self.range.max_offset);
        self.range.offset = self.offset;
        self.offset
    }

    /// Scroll the least amount needed to show `[top, bottom)` in document
    /// space. Content taller than the viewport is aligned to its top.
    pub fn reveal(&mut self, top: i32, bottom: i32) -> i32 {
        let target = if top < self.offset || bottom - top > self.viewport_height {
            top
        } else if bottom > self.offset + self.viewport_height {
            bottom - self.viewport_height
        } else {
            self.offset
        };
        self.apply_delta(ScrollDelta::Thumb(target))
    }

    /// Current offset into document space.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Range computed by the last update.
    pub fn range(&self) -> ScrollRange {
        self.range
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> i32 {
        self.range.max_offset
    }

    /// True if the document does not fit.
    pub fn is_enabled(&self) -> bool {
        self.range.enabled
    }

    /// Document height last recorded.
    pub fn document_height(&self) -> i32 {
        self.document_height
    }

    /// Viewport height last recorded.
    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    /// True while `update_range_with` is running.
    pub fn is_updating(&self) -> bool {
        self.updating
    }
}
