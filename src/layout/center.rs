//! Center tracking - which item sits closest to the viewport center

use super::types::{ItemGeometry, ItemIndex};
use crate::geometry::Rect;
use serde::Serialize;

/// One-shot notification about the centered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum CenterEvent {
    /// First centered item since creation or the last invalidation.
    Loaded(ItemIndex),
    /// The centered item changed.
    Changed(ItemIndex),
}

impl CenterEvent {
    /// The item the event refers to.
    pub fn index(&self) -> ItemIndex {
        match *self {
            Self::Loaded(index) | Self::Changed(index) => index,
        }
    }
}

/// Find the item closest to `viewport_mid_x`.
///
/// Only items whose frame intersects a band one `unit_width` wide around the
/// center are candidates; a point test could fall into the gap between
/// items. Ties go to the first candidate in `geometries` order.
///
/// Returns `None` when the band meets no item, which happens transiently
/// while content jumps across a wrap boundary.
pub fn closest_to_center(
    geometries: &[ItemGeometry],
    viewport_mid_x: f64,
    viewport_height: f64,
    unit_width: f64,
) -> Option<ItemIndex> {
    let band = Rect::new(
        viewport_mid_x - unit_width / 2.0,
        0.0,
        unit_width,
        viewport_height,
    );

    let mut closest: Option<(ItemIndex, f64)> = None;
    for geometry in geometries.iter().filter(|g| band.intersects(&g.frame())) {
        let distance = (geometry.center.x - viewport_mid_x).abs();
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((geometry.index, distance)),
        }
    }
    closest.map(|(index, _)| index)
}

/// Remembers the last centered item and turns observations into events.
///
/// # Invariants
/// - A `None` observation never clears the remembered index.
/// - The first successful observation after construction or [`reset`]
///   yields `Loaded`; later differing observations yield `Changed`.
/// - Repeating the remembered index yields nothing.
///
/// [`reset`]: CenterTracker::reset
#[derive(Debug, Clone, Default)]
pub struct CenterTracker {
    last: Option<ItemIndex>,
}

impl CenterTracker {
    /// Tracker with nothing centered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last reported centered index.
    pub fn last(&self) -> Option<ItemIndex> {
        self.last
    }

    /// Forget the last centered index so the next success reports `Loaded`.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Record an observation and return the event it produces, if any.
    pub fn observe(&mut self, current: Option<ItemIndex>) -> Option<CenterEvent> {
        let current = current?;
        let event = match self.last {
            None => CenterEvent::Loaded(current),
            Some(previous) if previous != current => CenterEvent::Changed(current),
            Some(_) => return None,
        };
        self.last = Some(current);
        Some(event)
    }
}
