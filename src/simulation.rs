//! Scroll session simulation
//!
//! `ScrollSimulation` plays the scroll surface that hosts a [`LoopLayout`]:
//! it owns the scroll offset, applies initial placement and offset
//! corrections the layout asks for, and records what every pass produced.

use crate::geometry::Size;
use crate::layout::{CenterEvent, ItemIndex, LoopLayout, PassOutcome, ViewportContext};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::debug;

/// One item visible in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisibleItem {
    /// Item index.
    pub index: ItemIndex,
    /// Untransformed center in content coordinates.
    pub center_x: f64,
    /// Zoom scale.
    pub scale: f64,
    /// Vertical drop onto the arc.
    pub arc_translation: f64,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    /// Zero-based frame number.
    pub frame: usize,
    /// Offset the geometry was computed at.
    pub offset: f64,
    /// Initial placement applied before this frame was computed.
    pub initial_offset: Option<f64>,
    /// Wrap correction applied after this frame.
    pub correction: Option<f64>,
    /// Center notification produced by the pass.
    pub center_event: Option<CenterEvent>,
    /// Item nearest the viewport center.
    pub centered: Option<ItemIndex>,
    /// Items intersecting the viewport, in layout order.
    pub visible: Vec<VisibleItem>,
}

/// Full session, serialisable as JSON or printable as a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Items in the carousel at the end of the session.
    pub item_count: usize,
    /// Final viewport size.
    pub viewport: Size,
    /// Whether the layout was looping at the end of the session.
    pub wrapping: bool,
    /// Scrollable content size.
    pub content_size: Size,
    /// Every recorded pass.
    pub frames: Vec<FrameReport>,
}

impl SimulationReport {
    /// Plain-text table, one row per frame.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} items, viewport {}x{}, {}",
            self.item_count,
            self.viewport.width,
            self.viewport.height,
            if self.wrapping { "wrapping" } else { "bounded" }
        );
        push_row(&mut out, "frame", "offset", "correction", "center", "visible");

        for frame in &self.frames {
            let correction = frame
                .correction
                .map_or_else(|| "-".to_string(), |delta| format!("{delta:+.1}"));
            let center = match frame.center_event {
                Some(CenterEvent::Loaded(index)) => format!("loaded {index}"),
                Some(CenterEvent::Changed(index)) => format!("changed {index}"),
                None => "-".to_string(),
            };
            let visible = frame
                .visible
                .iter()
                .map(|item| item.index.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            push_row(
                &mut out,
                &frame.frame.to_string(),
                &format!("{:.1}", frame.offset),
                &correction,
                &center,
                &visible,
            );
        }
        out
    }
}

fn push_row(
    out: &mut String,
    frame: &str,
    offset: &str,
    correction: &str,
    center: &str,
    visible: &str,
) {
    let row = format!("{frame:>5} {offset:>10} {correction:>10} {center:<12} {visible}");
    out.push_str(row.trim_end());
    out.push('\n');
}

/// A layout driven through a sequence of scroll positions.
#[derive(Debug)]
pub struct ScrollSimulation {
    layout: LoopLayout,
    viewport: ViewportContext,
    item_count: usize,
    frames: Vec<FrameReport>,
}

impl ScrollSimulation {
    /// Session over `item_count` items in a `width` x `height` viewport at offset 0.
    pub fn new(layout: LoopLayout, item_count: usize, width: f64, height: f64) -> Self {
        Self {
            layout,
            viewport: ViewportContext::new(width, height),
            item_count,
            frames: Vec::new(),
        }
    }

    /// Start with accessibility navigation already active.
    pub fn with_accessibility(mut self, active: bool) -> Self {
        self.viewport.accessibility_navigation_active = active;
        self
    }

    /// The layout being driven.
    pub fn layout(&self) -> &LoopLayout {
        &self.layout
    }

    /// Current scroll offset.
    pub fn offset(&self) -> f64 {
        self.viewport.scroll_offset_x
    }

    /// Frames recorded so far.
    pub fn frames(&self) -> &[FrameReport] {
        &self.frames
    }

    /// Run a pass at the current offset, apply what it asks for, and record it.
    pub fn pass(&mut self) -> &FrameReport {
        let outcome = self.layout.prepare(self.item_count, &self.viewport);
        let report = self.record(&outcome);

        if let Some(delta) = outcome.offset_correction {
            self.viewport.scroll_offset_x += delta;
        }
        self.frames.push(report);
        &self.frames[self.frames.len() - 1]
    }

    fn record(&mut self, outcome: &PassOutcome) -> FrameReport {
        if let Some(offset) = outcome.initial_offset {
            self.viewport.scroll_offset_x = offset;
        }
        let visible = self
            .layout
            .visible_geometries()
            .into_iter()
            .map(|geometry| VisibleItem {
                index: geometry.index,
                center_x: geometry.center.x,
                scale: geometry.transform.scale_x(),
                arc_translation: geometry.transform.translation_y(),
            })
            .collect();
        FrameReport {
            frame: self.frames.len(),
            offset: self.viewport.scroll_offset_x,
            initial_offset: outcome.initial_offset,
            correction: outcome.offset_correction,
            center_event: outcome.center_event,
            centered: self.layout.closest_index_to_center(),
            visible,
        }
    }

    /// Jump to an absolute offset and run a pass.
    pub fn scroll_to(&mut self, offset: f64) -> &FrameReport {
        self.viewport.scroll_offset_x = offset;
        self.pass()
    }

    /// Scroll by `delta` and run a pass.
    pub fn scroll_by(&mut self, delta: f64) -> &FrameReport {
        self.viewport.scroll_offset_x += delta;
        self.pass()
    }

    /// End a drag: snap to the target offset the layout proposes.
    pub fn settle(&mut self, velocity: f64) -> &FrameReport {
        let target = self
            .layout
            .target_content_offset(self.viewport.scroll_offset_x, velocity);
        debug!(from = self.viewport.scroll_offset_x, to = target, "settling");
        self.scroll_to(target)
    }

    /// Resize the viewport and run a pass.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> &FrameReport {
        self.viewport.width = width;
        self.viewport.height = height;
        self.pass()
    }

    /// Toggle accessibility navigation and run a pass.
    pub fn set_accessibility(&mut self, active: bool) -> &FrameReport {
        self.viewport.accessibility_navigation_active = active;
        self.pass()
    }

    /// Change the item count and run a pass.
    pub fn reload(&mut self, item_count: usize) -> &FrameReport {
        self.item_count = item_count;
        self.pass()
    }

    /// Snapshot of the session so far.
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            item_count: self.item_count,
            viewport: self.viewport.size(),
            wrapping: self
                .layout
                .wrap_decision()
                .is_some_and(|wrap| wrap.should_wrap),
            content_size: self.layout.content_size(),
            frames: self.frames.clone(),
        }
    }
}
