//! Core layout newtypes and per-pass inputs/outputs

use crate::geometry::{Point, Rect, Size, Transform3D};
use serde::Serialize;

/// Index of an item in the finite backing collection. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new ItemIndex from a raw 0-based value.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Next index, if it is still below `item_count`.
    pub fn next(&self, item_count: usize) -> Option<Self> {
        let next = self.0.checked_add(1)?;
        (next < item_count).then_some(Self(next))
    }

    /// Previous index, if any.
    pub fn prev(&self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only host state supplied fresh to every layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportContext {
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
    /// Current horizontal scroll offset of the host surface.
    pub scroll_offset_x: f64,
    /// True while a sequential accessibility navigation mode (screen reader,
    /// switch control) is running.
    pub accessibility_navigation_active: bool,
}

impl ViewportContext {
    /// Viewport of the given size at offset zero with accessibility inactive.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Same viewport at another scroll offset.
    pub fn with_offset(mut self, scroll_offset_x: f64) -> Self {
        self.scroll_offset_x = scroll_offset_x;
        self
    }

    /// Same viewport with accessibility navigation toggled.
    pub fn with_accessibility(mut self, active: bool) -> Self {
        self.accessibility_navigation_active = active;
        self
    }

    /// Viewport size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True when there is no usable viewport to lay out into.
    pub fn is_absent(&self) -> bool {
        self.size().is_degenerate()
    }

    /// Visible rectangle in content coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(self.scroll_offset_x, 0.0, self.width, self.height)
    }

    /// Horizontal center of the visible rectangle in content coordinates.
    pub fn mid_x(&self) -> f64 {
        self.scroll_offset_x + self.width / 2.0
    }
}

/// Computed geometry of one item for the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemGeometry {
    /// Which item this geometry belongs to.
    pub index: ItemIndex,
    /// Untransformed size.
    pub size: Size,
    /// Untransformed center in content coordinates.
    pub center: Point,
    /// Arc/zoom transform relative to the frame.
    pub transform: Transform3D,
}

impl ItemGeometry {
    /// Geometry with an identity transform.
    pub fn new(index: ItemIndex, size: Size, center: Point) -> Self {
        Self {
            index,
            size,
            center,
            transform: Transform3D::IDENTITY,
        }
    }

    /// Untransformed frame, used for rectangle queries.
    pub fn frame(&self) -> Rect {
        Rect::centered_at(self.center, self.size)
    }

    /// Bounding rectangle after the transform is applied.
    pub fn visual_frame(&self) -> Rect {
        self.transform.apply_to_rect(&self.frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod item_index {
        use super::*;

        #[test]
        fn next_stops_at_item_count() {
            assert_eq!(ItemIndex::new(3).next(5), Some(ItemIndex::new(4)));
            assert_eq!(ItemIndex::new(4).next(5), None);
        }

        #[test]
        fn prev_stops_at_zero() {
            assert_eq!(ItemIndex::new(1).prev(), Some(ItemIndex::new(0)));
            assert_eq!(ItemIndex::new(0).prev(), None);
        }

        #[test]
        fn displays_raw_value() {
            assert_eq!(ItemIndex::new(7).to_string(), "7");
        }
    }

    mod viewport {
        use super::*;

        #[test]
        fn zero_width_is_absent() {
            assert!(ViewportContext::new(0.0, 100.0).is_absent());
            assert!(ViewportContext::new(300.0, 0.0).is_absent());
            assert!(!ViewportContext::new(300.0, 100.0).is_absent());
        }

        #[test]
        fn mid_x_follows_offset() {
            let viewport = ViewportContext::new(300.0, 100.0).with_offset(1000.0);
            assert_eq!(viewport.mid_x(), 1150.0);
            assert_eq!(viewport.visible_rect(), Rect::new(1000.0, 0.0, 300.0, 100.0));
        }
    }

    mod geometry {
        use super::*;

        #[test]
        fn frame_is_centered_on_center() {
            let g = ItemGeometry::new(
                ItemIndex::new(0),
                Size::new(80.0, 80.0),
                Point::new(100.0, 40.0),
            );
            assert_eq!(g.frame(), Rect::new(60.0, 0.0, 80.0, 80.0));
        }

        #[test]
        fn visual_frame_applies_transform() {
            let mut g = ItemGeometry::new(
                ItemIndex::new(0),
                Size::new(80.0, 80.0),
                Point::new(100.0, 40.0),
            );
            g.transform = Transform3D::translation(0.0, 5.0, 0.0).scaled(1.5, 1.5, 1.0);
            let visual = g.visual_frame();
            assert_eq!(visual.mid_y(), 45.0);
            assert_eq!(visual.size, Size::new(120.0, 120.0));
        }
    }
}
