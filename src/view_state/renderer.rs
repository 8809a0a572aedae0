//! Paints a computed layout onto a [`Surface`].
//!
//! Layout is in document space; everything drawn here is translated by the
//! scroll offset. Only rows intersecting `[offset, offset + viewport_height)`
//! are visited, found through the layout's height index.

use super::layout::TreeLayout;
use super::surface::Surface;
use super::types::{Point, Rect};
use super::visible_range::VisibleRange;
use crate::model::{NodeIndex, Tree};

/// Counts of what a paint call drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Nodes with at least one line painted.
    pub nodes: usize,
    /// Text lines painted.
    pub lines: usize,
    /// Line segments drawn.
    pub segments: usize,
}

/// Paint the visible band of `layout`.
///
/// Connecting lines are drawn when the layout's style has `show_lines` set:
/// for each child of an expanded parent, a vertical segment down the parent's
/// trunk (at `parent.x + indent / 2`) from the previous anchor to the child's
/// anchor row, then a horizontal segment to just before the child's text.
pub fn paint<S: Surface + ?Sized>(
    surface: &mut S,
    tree: &Tree,
    layout: &TreeLayout,
    offset: i32,
    viewport_height: i32,
) -> RenderStats {
    let mut stats = RenderStats::default();
    let range = VisibleRange::compute(layout, offset, viewport_height);
    if range.is_empty() {
        return stats;
    }
    let band = (offset, offset + viewport_height);

    if layout.params().style.show_lines {
        for parent in parents_crossing_band(tree, layout, &range) {
            stats.segments += paint_links(surface, tree, layout, parent, band);
        }
    }

    let line_height = layout.line_height();
    for &index in range.nodes(layout) {
        let Some(node) = layout.get(index) else {
            continue;
        };
        let mut painted = false;
        for (i, line) in node.lines.iter().enumerate() {
            let top = node.rect.y + i as i32 * line_height;
            if top + line_height <= band.0 || top >= band.1 {
                continue;
            }
            let rect = Rect::new(node.rect.x, top - offset, node.rect.width, line_height);
            surface.draw_text(rect, line);
            stats.lines += 1;
            painted = true;
        }
        if painted {
            stats.nodes += 1;
        }
    }
    stats
}

/// Nodes whose child links may cross the band: every node in the band plus
/// the ancestors of the first one (their trunks pass through from above).
fn parents_crossing_band(tree: &Tree, layout: &TreeLayout, range: &VisibleRange) -> Vec<NodeIndex> {
    let in_band = range.nodes(layout);
    let mut parents = Vec::new();
    if let Some(&first) = in_band.first() {
        let mut ancestor = tree.parent(first).unwrap_or(NodeIndex::ROOT);
        while !ancestor.is_root() {
            parents.push(ancestor);
            ancestor = tree.parent(ancestor).unwrap_or(NodeIndex::ROOT);
        }
    }
    parents.extend_from_slice(in_band);
    parents
}

fn paint_links<S: Surface + ?Sized>(
    surface: &mut S,
    tree: &Tree,
    layout: &TreeLayout,
    parent: NodeIndex,
    band: (i32, i32),
) -> usize {
    let Ok(node) = tree.get(parent) else {
        return 0;
    };
    let Some(parent_layout) = layout.get(parent) else {
        return 0;
    };
    if !node.is_expanded() {
        return 0;
    }

    let offset = band.0;
    let trunk_x = parent_layout.rect.x + layout.params().style.indent / 2;
    let anchor_dy = layout.line_height() / 2;
    let mut from_y = parent_layout.rect.bottom();
    let mut drawn = 0;

    for &child in node.children() {
        if from_y >= band.1 {
            break;
        }
        let Some(child_layout) = layout.get(child) else {
            continue;
        };
        let child_y = child_layout.rect.y + anchor_dy;
        if child_y >= band.0 {
            surface.draw_line(
                Point::new(trunk_x, from_y - offset),
                Point::new(trunk_x, child_y - offset),
            );
            drawn += 1;
            if child_y < band.1 {
                surface.draw_line(
                    Point::new(trunk_x, child_y - offset),
                    Point::new(child_layout.rect.x - 1, child_y - offset),
                );
                drawn += 1;
            }
        }
        from_y = child_y;
    }
    drawn
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
