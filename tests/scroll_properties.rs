//! Property tests for the scroll controller's range rule.
//!
//! Property under test: after any sequence of resizes, content changes and
//! scroll requests, the offset stays in `[0, max_offset]`, and scrolling is
//! disabled exactly when the viewport holds the document plus its margin.

use proptest::prelude::*;
use tagtree::view_state::scroll::{ScrollController, ScrollDelta};

// ===== Arbitrary Strategies =====

fn arb_delta() -> impl Strategy<Value = ScrollDelta> {
    prop_oneof![
        Just(ScrollDelta::LineUp),
        Just(ScrollDelta::LineDown),
        Just(ScrollDelta::PageUp),
        Just(ScrollDelta::PageDown),
        Just(ScrollDelta::Top),
        Just(ScrollDelta::Bottom),
        Just(ScrollDelta::WheelUp),
        Just(ScrollDelta::WheelDown),
        (-500i32..5000).prop_map(ScrollDelta::Thumb),
    ]
}

#[derive(Debug, Clone)]
enum Step {
    Scroll(ScrollDelta),
    Document(i32),
    Resize(i32),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => arb_delta().prop_map(Step::Scroll),
        1 => (0i32..4000).prop_map(Step::Document),
        1 => (0i32..1000).prop_map(Step::Resize),
    ]
}

fn assert_in_range(scroll: &ScrollController, margin: i32) -> Result<(), TestCaseError> {
    let document = scroll.document_height();
    let viewport = scroll.viewport_height();
    let disabled = viewport >= document + margin;

    prop_assert_eq!(scroll.is_enabled(), !disabled);
    if disabled {
        prop_assert_eq!(scroll.max_offset(), 0);
    } else {
        prop_assert_eq!(scroll.max_offset(), document + margin - viewport);
    }
    prop_assert!(scroll.offset() >= 0);
    prop_assert!(scroll.offset() <= scroll.max_offset());
    Ok(())
}

proptest! {
    #[test]
    fn offset_always_within_range(
        margin in 0i32..32,
        line_height in 1i32..24,
        document in 0i32..4000,
        viewport in 0i32..1000,
        steps in prop::collection::vec(arb_step(), 0..40),
    ) {
        let mut scroll = ScrollController::new(margin, line_height);
        scroll.set_viewport_height(viewport);
        scroll.set_document_height(document);
        scroll.update_range();
        assert_in_range(&scroll, margin)?;

        for step in steps {
            match step {
                Step::Scroll(delta) => {
                    let returned = scroll.apply_delta(delta);
                    prop_assert_eq!(returned, scroll.offset());
                }
                Step::Document(height) => {
                    scroll.set_document_height(height);
                    scroll.update_range();
                }
                Step::Resize(height) => {
                    scroll.handle_viewport_resize(height);
                }
            }
            assert_in_range(&scroll, margin)?;
        }
    }

    #[test]
    fn bottom_then_top_round_trips(
        document in 0i32..4000,
        viewport in 1i32..1000,
    ) {
        let mut scroll = ScrollController::new(8, 20);
        scroll.set_viewport_height(viewport);
        scroll.set_document_height(document);
        scroll.update_range();

        prop_assert_eq!(scroll.apply_delta(ScrollDelta::Bottom), scroll.max_offset());
        prop_assert_eq!(scroll.apply_delta(ScrollDelta::Top), 0);
    }
}

#[test]
fn short_document_disables_scrolling() {
    let mut scroll = ScrollController::new(8, 20);
    scroll.set_viewport_height(400);
    scroll.set_document_height(380);
    let range = scroll.update_range();

    assert!(!range.enabled);
    assert_eq!(range.max_offset, 0);
    assert_eq!(scroll.apply_delta(ScrollDelta::PageDown), 0);
}

#[test]
fn shrinking_document_pulls_offset_back() {
    let mut scroll = ScrollController::new(8, 20);
    scroll.set_viewport_height(400);
    scroll.set_document_height(2000);
    scroll.update_range();
    scroll.apply_delta(ScrollDelta::Bottom);
    assert_eq!(scroll.offset(), 1608);

    scroll.set_document_height(600);
    scroll.update_range();
    assert_eq!(scroll.offset(), 208);
}
