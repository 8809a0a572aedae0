//! Layout pass - wrapped-text geometry for every visible node.
//!
//! One traversal in display order produces a [`TreeLayout`]: absolute
//! document-space rectangles, the wrapped lines of each node, the reserved
//! band of each node (its own rows plus its visible descendants), and a
//! [`HeightIndex`] over the display rows for O(log n) band queries.

use super::height_index::HeightIndex;
use super::layout_params::LayoutParams;
use super::surface::TextMeasure;
use super::types::Rect;
use super::wrap::wrap_text;
use crate::model::{NodeIndex, Tree};
use std::collections::HashMap;
use tracing::debug;

/// Geometry of one visible node.
///
/// # Invariants
/// - `rect.height == lines.len() * line_height`
/// - `band_height >= rect.height`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLayout {
    /// Text rectangle in document space. Width is the widest wrapped line.
    pub rect: Rect,
    /// Wrapped text lines, top to bottom. Never empty.
    pub lines: Vec<String>,
    /// Number of ancestors.
    pub depth: usize,
    /// Position in display order.
    pub row: usize,
    /// Height of the node's own rows plus every visible descendant.
    pub band_height: i32,
}

impl NodeLayout {
    /// Bottom of the reserved band (exclusive).
    pub fn band_bottom(&self) -> i32 {
        self.rect.y + self.band_height
    }
}

/// Cached result of a layout pass.
#[derive(Debug, Clone)]
pub struct TreeLayout {
    order: Vec<NodeIndex>,
    nodes: HashMap<NodeIndex, NodeLayout>,
    heights: HeightIndex,
    total_height: i32,
    root_end: i32,
    line_height: i32,
    params: LayoutParams,
    revision: u64,
}

impl TreeLayout {
    /// Layout of `index`, or `None` if it is not visible in this pass.
    pub fn get(&self, index: NodeIndex) -> Option<&NodeLayout> {
        self.nodes.get(&index)
    }

    /// Visible nodes in display order.
    pub fn order(&self) -> &[NodeIndex] {
        &self.order
    }

    /// Node shown at display row `row`.
    pub fn node_at_row(&self, row: usize) -> Option<NodeIndex> {
        self.order.get(row).copied()
    }

    /// Display row covering document offset `y`.
    pub fn row_at(&self, y: i32) -> Option<usize> {
        if y < 0 {
            return None;
        }
        self.heights.lower_bound(y as u64)
    }

    /// Row heights in display order.
    pub fn heights(&self) -> &HeightIndex {
        &self.heights
    }

    /// Sum of every visible node's height.
    pub fn total_height(&self) -> i32 {
        self.total_height
    }

    /// X coordinate at which the root column ends.
    pub fn root_end(&self) -> i32 {
        self.root_end
    }

    /// Height of one wrapped text line, padding included.
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Parameters this layout was computed with.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Tree revision this layout was computed from.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of visible nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Text displayed for a node: the tag, plus the collapsed marker when the
/// node hides children.
pub fn display_text(tree: &Tree, index: NodeIndex, marker: &str) -> String {
    match tree.get(index) {
        Ok(node) if !node.is_expanded() && node.has_children() => {
            format!("{}{}", node.tag(), marker)
        }
        Ok(node) => node.tag().to_string(),
        Err(_) => String::new(),
    }
}

/// Run a full layout pass.
///
/// Never fails: nodes that vanish mid-walk are simply not laid out.
///
/// # Examples
///
/// ```
/// use tagtree::model::{NodeIndex, NodeInit, NodeKind, Tree};
/// use tagtree::view_state::layout::compute_layout;
/// use tagtree::view_state::layout_params::LayoutParams;
/// use tagtree::view_state::style::TreeStyle;
/// use tagtree::view_state::surface::MonospaceMeasure;
///
/// let mut tree = Tree::new();
/// let doc = tree
///     .add_node("Document", NodeIndex::ROOT, NodeKind::DocumentRoot, NodeInit::default())
///     .unwrap();
/// tree.add_node("EventA", doc, NodeKind::Event, NodeInit::default()).unwrap();
///
/// let params = LayoutParams::new(80, TreeStyle::default());
/// let layout = compute_layout(&tree, &params, &MonospaceMeasure::new(1, 1));
/// assert_eq!(layout.total_height(), 2);
/// assert_eq!(layout.get(doc).unwrap().band_height, 2);
/// ```
pub fn compute_layout<M: TextMeasure + ?Sized>(
    tree: &Tree,
    params: &LayoutParams,
    measure: &M,
) -> TreeLayout {
    let style = &params.style;
    let line_height = (measure.text_extent("X").height + style.line_padding).max(1);
    let visible = tree.visible();

    let mut order = Vec::with_capacity(visible.len());
    let mut nodes = HashMap::with_capacity(visible.len());
    let mut heights = HeightIndex::new(visible.len());
    // Open ancestors as (index, depth); closed when a node at the same or
    // shallower depth starts, or at the end of the walk.
    let mut open: Vec<(NodeIndex, usize)> = Vec::new();
    let mut y = 0;

    for (row, &(index, depth)) in visible.iter().enumerate() {
        close_bands(&mut nodes, &mut open, depth, y);

        let text = display_text(tree, index, &style.collapsed_marker);
        let available = style.available_width(params.width, depth);
        let lines = wrap_text(measure, available, &text);
        let width = lines
            .iter()
            .map(|line| measure.text_extent(line).width)
            .max()
            .unwrap_or(0);
        let height = lines.len() as i32 * line_height;

        nodes.insert(
            index,
            NodeLayout {
                rect: Rect::new(style.text_x(depth), y, width, height),
                lines,
                depth,
                row,
                band_height: height,
            },
        );
        order.push(index);
        heights.push(height as u32);
        open.push((index, depth));
        y += height;
    }
    close_bands(&mut nodes, &mut open, 0, y);

    debug!(
        nodes = order.len(),
        total_height = y,
        width = params.width,
        revision = tree.revision(),
        "layout pass"
    );

    TreeLayout {
        order,
        nodes,
        heights,
        total_height: y,
        root_end: style.root_end(),
        line_height,
        params: params.clone(),
        revision: tree.revision(),
    }
}

fn close_bands(
    nodes: &mut HashMap<NodeIndex, NodeLayout>,
    open: &mut Vec<(NodeIndex, usize)>,
    depth: usize,
    y: i32,
) {
    while let Some(&(index, open_depth)) = open.last() {
        if open_depth < depth {
            break;
        }
        open.pop();
        if let Some(layout) = nodes.get_mut(&index) {
            layout.band_height = y - layout.rect.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeInit, NodeKind};
    use crate::view_state::style::TreeStyle;
    use crate::view_state::surface::MonospaceMeasure;

    const CELL: MonospaceMeasure = MonospaceMeasure::new(1, 1);

    fn add(tree: &mut Tree, tag: &str, parent: NodeIndex) -> NodeIndex {
        tree.add_node(tag, parent, NodeKind::Leaf, NodeInit::default())
            .unwrap()
    }

    /// r{a{a1, a2}, b} plus a second root s.
    fn sample() -> (Tree, [NodeIndex; 6]) {
        let mut tree = Tree::new();
        let r = add(&mut tree, "r", NodeIndex::ROOT);
        let a = add(&mut tree, "a", r);
        let a1 = add(&mut tree, "a1", a);
        let a2 = add(&mut tree, "a2", a);
        let b = add(&mut tree, "b", r);
        let s = add(&mut tree, "s", NodeIndex::ROOT);
        (tree, [r, a, a1, a2, b, s])
    }

    fn layout(tree: &Tree, width: i32) -> TreeLayout {
        compute_layout(tree, &LayoutParams::new(width, TreeStyle::default()), &CELL)
    }

    #[test]
    fn y_follows_display_order() {
        let (tree, [r, a, a1, a2, b, s]) = sample();
        let l = layout(&tree, 80);
        let ys: Vec<_> = [r, a, a1, a2, b, s]
            .iter()
            .map(|&i| l.get(i).unwrap().rect.y)
            .collect();
        assert_eq!(ys, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(l.total_height(), 6);
    }

    #[test]
    fn x_is_padding_plus_depth_indent() {
        let (tree, [r, a, a1, ..]) = sample();
        let l = layout(&tree, 80);
        assert_eq!(l.get(r).unwrap().rect.x, 1);
        assert_eq!(l.get(a).unwrap().rect.x, 3);
        assert_eq!(l.get(a1).unwrap().rect.x, 5);
    }

    #[test]
    fn band_covers_visible_descendants() {
        let (tree, [r, a, a1, _, b, s]) = sample();
        let l = layout(&tree, 80);
        assert_eq!(l.get(r).unwrap().band_height, 5);
        assert_eq!(l.get(a).unwrap().band_height, 3);
        assert_eq!(l.get(a1).unwrap().band_height, 1);
        assert_eq!(l.get(b).unwrap().band_height, 1);
        assert_eq!(l.get(s).unwrap().band_height, 1);
    }

    #[test]
    fn collapsed_node_reserves_no_child_height() {
        let (mut tree, [r, a, a1, _, b, _]) = sample();
        tree.toggle_expansion(a).unwrap();
        let l = layout(&tree, 80);
        assert!(l.get(a1).is_none());
        assert_eq!(l.get(a).unwrap().band_height, 1);
        assert_eq!(l.get(b).unwrap().rect.y, 2);
        assert_eq!(l.get(r).unwrap().band_height, 3);
        assert_eq!(l.total_height(), 4);
    }

    #[test]
    fn collapsed_marker_is_measured() {
        let (mut tree, [_, a, ..]) = sample();
        tree.toggle_expansion(a).unwrap();
        let l = layout(&tree, 80);
        assert_eq!(l.get(a).unwrap().lines, vec!["a [+]"]);
        assert_eq!(l.get(a).unwrap().rect.width, 5);
    }

    #[test]
    fn collapsed_leaf_has_no_marker() {
        let (mut tree, [.., b, _]) = sample();
        tree.toggle_expansion(b).unwrap();
        let l = layout(&tree, 80);
        assert_eq!(l.get(b).unwrap().lines, vec!["b"]);
    }

    #[test]
    fn wrapped_node_is_taller() {
        let mut tree = Tree::new();
        let n = add(&mut tree, "alpha beta gamma", NodeIndex::ROOT);
        let after = add(&mut tree, "after", NodeIndex::ROOT);
        // padding 1 leaves 11 columns.
        let l = layout(&tree, 12);
        assert_eq!(l.get(n).unwrap().lines, vec!["alpha beta", "gamma"]);
        assert_eq!(l.get(n).unwrap().rect.height, 2);
        assert_eq!(l.get(after).unwrap().rect.y, 2);
    }

    #[test]
    fn line_height_includes_line_padding() {
        let mut tree = Tree::new();
        add(&mut tree, "x", NodeIndex::ROOT);
        let params = LayoutParams::new(200, TreeStyle::pixel());
        let l = compute_layout(&tree, &params, &MonospaceMeasure::new(10, 16));
        assert_eq!(l.line_height(), 20);
        assert_eq!(l.total_height(), 20);
        assert_eq!(l.root_end(), 20);
    }

    #[test]
    fn row_at_maps_offsets_to_rows() {
        let (tree, _) = sample();
        let l = layout(&tree, 80);
        assert_eq!(l.row_at(0), Some(0));
        assert_eq!(l.row_at(5), Some(5));
        assert_eq!(l.row_at(6), None);
        assert_eq!(l.row_at(-1), None);
    }

    #[test]
    fn empty_tree_has_zero_height() {
        let l = layout(&Tree::new(), 80);
        assert!(l.is_empty());
        assert_eq!(l.total_height(), 0);
    }

    #[test]
    fn empty_tag_keeps_a_row() {
        let mut tree = Tree::new();
        let n = add(&mut tree, "", NodeIndex::ROOT);
        let l = layout(&tree, 80);
        assert_eq!(l.get(n).unwrap().rect.height, 1);
    }

    #[test]
    fn records_revision_and_params() {
        let (tree, _) = sample();
        let l = layout(&tree, 42);
        assert_eq!(l.revision(), tree.revision());
        assert_eq!(l.params().width, 42);
    }
}
