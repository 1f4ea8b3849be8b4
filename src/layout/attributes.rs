//! Base (unwrapped) item geometry

use super::types::{ItemGeometry, ItemIndex};
use crate::geometry::{Point, Size};

/// Per-item measurements shared by every stage of a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    /// Untransformed item size.
    pub item_size: Size,
    /// Gap between neighbouring items.
    pub spacing: f64,
    /// Zoom factor applied at the viewport center.
    pub zoom_factor: f64,
}

impl ItemMetrics {
    /// Distance between the centers of neighbouring items.
    pub fn unit_width(&self) -> f64 {
        self.item_size.width + self.spacing
    }

    /// Fixed vertical center, leaving room for a fully zoomed item.
    pub fn center_y(&self) -> f64 {
        self.item_size.height * (1.0 + self.zoom_factor) / 2.0
    }

    /// Item size at maximum zoom.
    pub fn max_item_size(&self) -> Size {
        self.item_size.scaled(1.0 + self.zoom_factor)
    }
}

/// Build the base geometry for `item_count` items into `out`, left to right.
///
/// Item `i` is centered at `leading_inset + item_width/2 + i * unit_width`.
/// The buffer is cleared first and its allocation reused. Same inputs always
/// produce the same output.
pub fn build_base_geometries(
    item_count: usize,
    metrics: &ItemMetrics,
    leading_inset: f64,
    out: &mut Vec<ItemGeometry>,
) {
    out.clear();
    out.reserve(item_count);

    let unit = metrics.unit_width();
    let center_y = metrics.center_y();
    let first_x = leading_inset + metrics.item_size.width / 2.0;

    out.extend((0..item_count).map(|i| {
        ItemGeometry::new(
            ItemIndex::new(i),
            metrics.item_size,
            Point::new(first_x + unit * i as f64, center_y),
        )
    }));
}
