//! Transform engine - maps a scroll offset onto the current lap and applies
//! arc/zoom transforms
//!
//! # Pass steps
//!
//! 1. `locate`: turn the scroll offset into a content index, the real item
//!    index it lands on, and how many whole laps lie before it.
//! 2. `adjust_geometries`: rotate the base geometry so that item comes first
//!    and, when wrapping, re-walk the centers into the current lap.
//! 3. `TransformEngine::apply`: arc translation and zoom by distance from the
//!    viewport center.

use super::attributes::ItemMetrics;
use super::types::ItemGeometry;
use crate::config::LayoutConfig;
use crate::geometry::{arc_translation, circular_shift_into, Transform3D};

/// Where a scroll offset falls on the looped track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapPosition {
    /// Unbounded index of the item slot at the leading edge; exceeds
    /// `item_count` in later laps and is negative before the first.
    pub content_index: i64,
    /// `content_index` reduced into `[0, item_count)`.
    pub item_index: usize,
    /// Whole laps between slot 0 and `content_index` (floor division).
    pub multiple: i64,
}

/// Locate `scroll_offset` on the track.
///
/// Returns `None` when there are no items or the unit width is not positive.
pub fn locate(
    scroll_offset: f64,
    leading_inset: f64,
    unit_width: f64,
    item_count: usize,
) -> Option<LapPosition> {
    if item_count == 0 || !(unit_width > 0.0) {
        return None;
    }
    let normalized = scroll_offset - leading_inset;
    let content_index = (normalized / unit_width).floor() as i64;
    let count = item_count as i64;
    let item_index = content_index.rem_euclid(count);
    let multiple = content_index.div_euclid(count);
    Some(LapPosition {
        content_index,
        item_index: item_index as usize,
        multiple,
    })
}

/// Write the adjusted geometry for `position` into `out`.
///
/// `out` always ends up as a rotation of `base`. When `should_wrap` is set
/// the centers are re-walked from the first item's base center shifted by
/// `multiple` laps, giving a contiguous run that starts at the leading edge
/// of the viewport whatever lap it is in. Otherwise the base centers are kept.
pub fn adjust_geometries(
    base: &[ItemGeometry],
    position: LapPosition,
    metrics: &ItemMetrics,
    lap_width: f64,
    should_wrap: bool,
    out: &mut Vec<ItemGeometry>,
) {
    circular_shift_into(base, position.item_index as isize, out);

    if !should_wrap {
        return;
    }
    let Some(first) = out.first() else {
        return;
    };

    let unit = metrics.unit_width();
    let mut current_x = first.center.x + lap_width * position.multiple as f64;
    for geometry in out.iter_mut() {
        geometry.center.x = current_x;
        current_x += unit;
    }
}

/// Continuous arc/zoom transform parameters for one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformEngine {
    /// Zoom factor at the exact center.
    pub zoom_factor: f64,
    /// Distance from center within which zoom applies.
    pub active_zoom_distance: f64,
    /// Distance from center within which items sit on the arc.
    pub active_arc_distance: f64,
    /// Arc radius used for translation. `None` disables the arc.
    pub arc_radius: Option<f64>,
}

impl TransformEngine {
    /// Derive the transform parameters for a viewport `viewport_width` wide.
    pub fn new(
        metrics: &ItemMetrics,
        viewport_width: f64,
        config: &LayoutConfig,
        arc_radius: Option<f64>,
    ) -> Self {
        Self {
            zoom_factor: metrics.zoom_factor,
            active_zoom_distance: viewport_width * config.active_zoom_fraction,
            active_arc_distance: (viewport_width + metrics.item_size.width) / 2.0,
            arc_radius,
        }
    }

    /// Transform for an item whose center is `distance` from the viewport center.
    ///
    /// Translation onto the arc first, then the zoom scale. The scale falls
    /// linearly from `1 + zoom_factor` at the center to exactly `1.0` at
    /// `active_zoom_distance`.
    pub fn transform_at(&self, distance: f64) -> Transform3D {
        let distance = distance.abs();
        let mut transform = Transform3D::IDENTITY;

        if let Some(radius) = self.arc_radius {
            if distance < self.active_arc_distance {
                transform = Transform3D::translation(0.0, arc_translation(radius, distance), 0.0);
            }
        }

        if self.zoom_factor > 0.0
            && self.active_zoom_distance > 0.0
            && distance <= self.active_zoom_distance
        {
            let normalized = distance / self.active_zoom_distance;
            let zoom = 1.0 + self.zoom_factor * (1.0 - normalized);
            transform = transform.scaled(zoom, zoom, 1.0);
        }

        transform
    }

    /// Set every geometry's transform from its distance to `viewport_mid_x`.
    pub fn apply(&self, geometries: &mut [ItemGeometry], viewport_mid_x: f64) {
        for geometry in geometries {
            geometry.transform = self.transform_at(viewport_mid_x - geometry.center.x);
        }
    }
}
