//! Snapshot tests for the simulation text report.
//!
//! Both sessions use the plain loop preset (80x80 items, spacing 20) in a
//! 300x100 viewport, scrolling 230 points per frame, so every number in the
//! tables is exact.

use loop_layout::config::LayoutConfig;
use loop_layout::layout::{CenterEvent, ItemIndex};
use loop_layout::simulation::ScrollSimulation;
use loop_layout::LoopLayout;

fn simulation(config: LayoutConfig) -> ScrollSimulation {
    ScrollSimulation::new(LoopLayout::new(config), 20, 300.0, 100.0)
}

#[test]
fn snapshot_plain_loop_forward() {
    let mut simulation = simulation(LayoutConfig::plain_loop());
    simulation.pass();
    for _ in 0..4 {
        simulation.scroll_by(230.0);
    }

    let report = simulation.report();
    insta::assert_snapshot!("plain_loop_forward", report.render_text());
}

#[test]
fn snapshot_bounded_settle() {
    let mut simulation = simulation(LayoutConfig {
        wrap: false,
        ..LayoutConfig::plain_loop()
    });
    simulation.pass();
    for _ in 0..3 {
        simulation.scroll_by(230.0);
    }
    simulation.settle(230.0);

    let report = simulation.report();
    insta::assert_snapshot!("bounded_settle", report.render_text());
}

#[test]
fn json_report_carries_event_tags() {
    let mut simulation = simulation(LayoutConfig::plain_loop());
    simulation.pass();
    simulation.scroll_by(100.0);

    let value = serde_json::to_value(simulation.report()).unwrap();
    assert_eq!(value["item_count"], 20);
    assert_eq!(value["wrapping"], true);
    assert_eq!(value["content_size"]["width"], 52_000.0);
    assert_eq!(value["frames"][0]["center_event"]["kind"], "loaded");
    assert_eq!(value["frames"][0]["center_event"]["index"], 1);
    assert_eq!(value["frames"][1]["center_event"]["kind"], "changed");
    assert_eq!(value["frames"][1]["centered"], 2);
}

#[test]
fn dial_session_zooms_the_centered_item() {
    let mut simulation = simulation(LayoutConfig::dial());
    let frame = simulation.pass().clone();

    assert_eq!(
        frame.center_event,
        Some(CenterEvent::Loaded(ItemIndex::new(1)))
    );
    let centered = frame
        .visible
        .iter()
        .find(|item| item.index == ItemIndex::new(1))
        .unwrap();
    assert!((centered.scale - 1.2).abs() < 1e-9);
    assert!(centered.arc_translation.abs() < 1e-9);

    for item in frame.visible.iter().filter(|item| item.index != ItemIndex::new(1)) {
        assert!(item.scale < centered.scale);
        assert!(item.arc_translation > 0.0);
    }
}
