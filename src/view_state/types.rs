//! Geometry primitives shared by layout, rendering and hit-testing.
//!
//! All coordinates are in surface units (pixels for a graphical surface,
//! cells for a terminal). Layout works in document space; painting and
//! pointer input work in viewport space, offset by the scroll position.

/// A point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift vertically.
    pub fn offset_y(self, dy: i32) -> Self {
        Self::new(self.x, self.y + dy)
    }
}

/// Measured size of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    /// Width in surface units.
    pub width: i32,
    /// Height in surface units.
    pub height: i32,
}

impl Extent {
    /// Create an extent.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width (never negative).
    pub width: i32,
    /// Height (never negative).
    pub height: i32,
}

impl Rect {
    /// Create a rectangle. Negative sizes are clamped to zero.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True if `point` lies inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// True if any row of this rectangle lies in `[top, bottom)`.
    pub fn intersects_band(&self, top: i32, bottom: i32) -> bool {
        self.y < bottom && self.bottom() > top
    }

    /// Same rectangle moved vertically.
    pub fn offset_y(&self, dy: i32) -> Self {
        Self { y: self.y + dy, ..*self }
    }
}

/// Size of the viewport the tree is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportDimensions {
    /// Width in surface units.
    pub width: i32,
    /// Height in surface units.
    pub height: i32,
}

impl ViewportDimensions {
    /// Create viewport dimensions.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
