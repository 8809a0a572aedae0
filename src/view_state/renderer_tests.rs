//! Tests for painting through the surface capability.

use super::*;
use crate::model::{NodeInit, NodeKind};
use crate::view_state::layout::compute_layout;
use crate::view_state::layout_params::LayoutParams;
use crate::view_state::style::TreeStyle;
use crate::view_state::surface::{MonospaceMeasure, TextMeasure};
use crate::view_state::types::Extent;

/// Records every draw call.
#[derive(Default)]
struct RecordingSurface {
    texts: Vec<(Rect, String)>,
    lines: Vec<(Point, Point)>,
}

impl TextMeasure for RecordingSurface {
    fn text_extent(&self, text: &str) -> Extent {
        MonospaceMeasure::new(1, 1).text_extent(text)
    }
}

impl Surface for RecordingSurface {
    fn draw_text(&mut self, rect: Rect, text: &str) {
        self.texts.push((rect, text.to_string()));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.lines.push((from, to));
    }
}

/// Document(1){EventA(2), EventB(3)}
fn document() -> Tree {
    let mut tree = Tree::new();
    let doc = tree
        .add_node("Document", NodeIndex::ROOT, NodeKind::DocumentRoot, NodeInit::default())
        .unwrap();
    tree.add_node("EventA", doc, NodeKind::Event, NodeInit::default())
        .unwrap();
    tree.add_node("EventB", doc, NodeKind::Event, NodeInit::default())
        .unwrap();
    tree
}

fn render(
    tree: &Tree,
    style: TreeStyle,
    width: i32,
    offset: i32,
    height: i32,
) -> (RecordingSurface, RenderStats) {
    let mut surface = RecordingSurface::default();
    let layout = compute_layout(tree, &LayoutParams::new(width, style), &surface);
    let stats = paint(&mut surface, tree, &layout, offset, height);
    (surface, stats)
}

fn texts(surface: &RecordingSurface) -> Vec<(i32, i32, &str)> {
    surface
        .texts
        .iter()
        .map(|(r, t)| (r.x, r.y, t.as_str()))
        .collect()
}

// ===== text =====

#[test]
fn paints_every_node_at_its_indent() {
    let (surface, stats) = render(&document(), TreeStyle::default(), 40, 0, 10);
    assert_eq!(
        texts(&surface),
        vec![(1, 0, "Document"), (3, 1, "EventA"), (3, 2, "EventB")]
    );
    assert_eq!(stats.nodes, 3);
    assert_eq!(stats.lines, 3);
}

#[test]
fn offset_translates_and_culls() {
    let (surface, _) = render(&document(), TreeStyle::default(), 40, 1, 1);
    assert_eq!(texts(&surface), vec![(3, 0, "EventA")]);
}

#[test]
fn band_past_document_paints_nothing() {
    let (surface, stats) = render(&document(), TreeStyle::default(), 40, 10, 5);
    assert!(surface.texts.is_empty());
    assert!(surface.lines.is_empty());
    assert_eq!(stats, RenderStats::default());
}

#[test]
fn only_visible_lines_of_a_wrapped_node_are_painted() {
    let mut tree = Tree::new();
    tree.add_node("aa bb cc dd", NodeIndex::ROOT, NodeKind::Leaf, NodeInit::default())
        .unwrap();
    // padding 1 leaves 2 columns: four lines.
    let (surface, stats) = render(&tree, TreeStyle::default(), 3, 1, 2);
    assert_eq!(texts(&surface), vec![(1, 0, "bb"), (1, 1, "cc")]);
    assert_eq!(stats.nodes, 1);
}

#[test]
fn collapsed_node_hides_children() {
    let mut tree = document();
    tree.toggle_expansion(NodeIndex::new(1)).unwrap();
    let (surface, _) = render(&tree, TreeStyle::default(), 40, 0, 10);
    assert_eq!(texts(&surface), vec![(1, 0, "Document [+]")]);
    assert!(surface.lines.is_empty());
}

// ===== connecting lines =====

#[test]
fn links_run_down_the_trunk_then_across() {
    let (surface, stats) = render(&document(), TreeStyle::default(), 40, 0, 10);
    assert_eq!(
        surface.lines,
        vec![
            (Point::new(2, 1), Point::new(2, 1)),
            (Point::new(2, 1), Point::new(2, 1)),
            (Point::new(2, 1), Point::new(2, 2)),
            (Point::new(2, 2), Point::new(2, 2)),
        ]
    );
    assert_eq!(stats.segments, 4);
}

#[test]
fn links_disabled_by_style() {
    let (surface, stats) = render(&document(), TreeStyle::default().with_lines(false), 40, 0, 10);
    assert!(surface.lines.is_empty());
    assert_eq!(stats.segments, 0);
    assert_eq!(surface.texts.len(), 3);
}

#[test]
fn trunk_from_scrolled_off_parent_is_still_drawn() {
    let (surface, _) = render(&document(), TreeStyle::default(), 40, 2, 1);
    assert_eq!(texts(&surface), vec![(3, 0, "EventB")]);
    assert!(surface
        .lines
        .iter()
        .any(|&(from, to)| from.x == 2 && to == Point::new(2, 0)));
}

#[test]
fn pixel_style_links_use_half_indent_and_line_center() {
    let tree = document();
    let mut surface = PixelRecorder::default();
    let layout = compute_layout(&tree, &LayoutParams::new(400, TreeStyle::pixel()), &surface);
    paint(&mut surface, &tree, &layout, 0, 400);
    // Document at x 4, children at x 20, rows 20 tall.
    assert_eq!(surface.lines[0], (Point::new(12, 20), Point::new(12, 30)));
    assert_eq!(surface.lines[1], (Point::new(12, 30), Point::new(19, 30)));
    assert_eq!(surface.lines[2], (Point::new(12, 30), Point::new(12, 50)));
}

#[derive(Default)]
struct PixelRecorder {
    lines: Vec<(Point, Point)>,
}

impl TextMeasure for PixelRecorder {
    fn text_extent(&self, text: &str) -> Extent {
        MonospaceMeasure::new(8, 16).text_extent(text)
    }
}

impl Surface for PixelRecorder {
    fn draw_text(&mut self, _rect: Rect, _text: &str) {}

    fn draw_line(&mut self, from: Point, to: Point) {
        self.lines.push((from, to));
    }
}
