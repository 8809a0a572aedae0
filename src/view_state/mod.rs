//! View-state layer - layout, scrolling, hit-testing and painting.
//!
//! Everything here is independent of the terminal: geometry is computed
//! against the [`surface::TextMeasure`] capability and painted through
//! [`surface::Surface`].
//!
//! # Module Structure
//!
//! - `types`: Geometry primitives (Point, Extent, Rect, ViewportDimensions)
//! - `style`: TreeStyle - immutable indent/padding/lines configuration
//! - `layout_params`: LayoutParams - inputs that force a relayout when changed
//! - `surface`: TextMeasure and Surface capability traits
//! - `wrap`: Greedy word wrap
//! - `height_index`: HeightIndex - O(log n) prefix sums via Fenwick tree
//! - `layout`: TreeLayout - one layout pass over the visible tree
//! - `cache`: LayoutCache - revision-keyed layout reuse
//! - `visible_range`: VisibleRange - rows intersecting the viewport
//! - `scroll`: ScrollController - offset range and deltas
//! - `hit_test`: HitTester - viewport point to node
//! - `renderer`: Paints text and connecting lines
//! - `context_menu`: Kind-keyed action table

pub mod cache;
pub mod context_menu;
pub mod height_index;
pub mod layout;
pub mod layout_params;
pub mod renderer;
pub mod scroll;
pub mod style;
pub mod surface;
pub mod types;
pub mod visible_range;
pub mod wrap;
