//! Centered-item notifications over long scroll sessions.

use crate::layout::{CenterEvent, ItemIndex};
use crate::test_harness::LayoutHarness;

fn assert_steps_by(events: &[CenterEvent], step: i64, item_count: i64) {
    for pair in events.windows(2) {
        let previous = pair[0].index().get() as i64;
        let current = pair[1].index().get() as i64;
        assert_eq!(
            current,
            (previous + step).rem_euclid(item_count),
            "events {pair:?}"
        );
    }
}

#[test]
fn forward_scrolling_through_a_correction() {
    let mut harness = LayoutHarness::plain(20);
    harness.pass();

    let mut corrections = 0;
    for _ in 0..120 {
        if harness.scroll_by(100.0).offset_correction.is_some() {
            corrections += 1;
        }
    }

    assert_eq!(corrections, 1);
    assert_eq!(harness.events.len(), 121);
    assert!(matches!(harness.events[0], CenterEvent::Loaded(_)));
    assert!(harness.events[1..]
        .iter()
        .all(|event| matches!(event, CenterEvent::Changed(_))));
    assert_steps_by(&harness.events, 1, 20);

    let wrap = *harness.layout.wrap_decision().unwrap();
    assert!(harness.offset() > wrap.leading_threshold);
    assert!(harness.offset() < wrap.trailing_threshold);
}

#[test]
fn backward_scrolling_through_a_correction() {
    let mut harness = LayoutHarness::plain(20);
    harness.pass();

    let mut corrections = Vec::new();
    for _ in 0..110 {
        if let Some(delta) = harness.scroll_by(-100.0).offset_correction {
            corrections.push(delta);
        }
    }

    assert_eq!(corrections, vec![10_000.0]);
    assert_eq!(harness.events.len(), 111);
    assert_steps_by(&harness.events, -1, 20);
}

#[test]
fn small_scrolls_report_each_change_once() {
    let mut harness = LayoutHarness::plain(20);
    harness.pass();
    for _ in 0..40 {
        harness.scroll_by(10.0);
    }

    // 400 points of travel move the center across four items.
    let changed: Vec<ItemIndex> = harness.log.centered();
    assert_eq!(
        changed,
        vec![
            ItemIndex::new(2),
            ItemIndex::new(3),
            ItemIndex::new(4),
            ItemIndex::new(5)
        ]
    );
    assert_eq!(harness.log.loaded(), vec![ItemIndex::new(1)]);
}

#[test]
fn zero_items_never_notify() {
    let mut harness = LayoutHarness::plain(0);
    for _ in 0..5 {
        let outcome = harness.scroll_by(500.0);
        assert_eq!(outcome.offset_correction, None);
        assert_eq!(outcome.center_event, None);
    }
    assert!(harness.events.is_empty());
    assert!(harness.log.calls().is_empty());
}
