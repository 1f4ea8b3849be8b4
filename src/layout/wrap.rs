//! Wrap controller - decides whether the content loops and sizes the virtual track
//!
//! When wrapping, the finite items are laid out `content_multiple` times
//! between two large insets. Crossing an inset threshold asks the scroll owner
//! to jump back by half the laps, which looks like an endless loop because
//! every lap renders identically.

use super::attributes::ItemMetrics;
use crate::config::LayoutConfig;
use serde::Serialize;

/// Looping feasibility and virtual content bounds for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WrapDecision {
    /// One lap of content is wider than the viewport plus one item.
    pub has_enough_content: bool,
    /// Looping is active.
    pub should_wrap: bool,
    /// Inset on each side of the laps (wrapping only).
    pub inset_width: f64,
    /// Number of laps in the virtual content (wrapping only).
    pub content_multiple: u32,
    /// Width of one lap: `item_count * (item_width + spacing)`.
    pub lap_width: f64,
    /// Total scrollable content width.
    pub virtual_content_width: f64,
    /// Offset of item 0's leading edge in content coordinates.
    pub leading_inset: f64,
    /// Scroll offsets at or before this trigger a forward jump.
    pub leading_threshold: f64,
    /// Scroll offsets at or beyond this trigger a backward jump.
    pub trailing_threshold: f64,
}

impl WrapDecision {
    /// Decide for `item_count` items measured by `metrics` in a viewport
    /// `viewport_width` wide.
    ///
    /// Accessibility navigation always disables wrapping: sequential
    /// navigation needs a first and a last item.
    pub fn evaluate(
        item_count: usize,
        metrics: &ItemMetrics,
        viewport_width: f64,
        config: &LayoutConfig,
        accessibility_active: bool,
    ) -> Self {
        let unit = metrics.unit_width();
        let lap_width = item_count as f64 * unit;

        if item_count == 0 {
            return Self {
                has_enough_content: false,
                should_wrap: false,
                inset_width: config.inset_width,
                content_multiple: config.content_multiple,
                lap_width: 0.0,
                virtual_content_width: viewport_width,
                leading_inset: 0.0,
                leading_threshold: 0.0,
                trailing_threshold: 0.0,
            };
        }

        let has_enough_content = lap_width > viewport_width + unit;
        let should_wrap = config.wrap && !accessibility_active && has_enough_content;

        if should_wrap {
            let virtual_content_width =
                config.inset_width * 2.0 + lap_width * f64::from(config.content_multiple);
            Self {
                has_enough_content,
                should_wrap,
                inset_width: config.inset_width,
                content_multiple: config.content_multiple,
                lap_width,
                virtual_content_width,
                leading_inset: config.inset_width,
                leading_threshold: config.inset_width,
                trailing_threshold: virtual_content_width - config.inset_width,
            }
        } else {
            // Half a viewport of margin on each side lets the first and last
            // items reach the center. A viewport narrower than an item gets no
            // margin, and the content still ends at the last item's edge.
            let leading_inset = (viewport_width / 2.0 - metrics.item_size.width / 2.0).max(0.0);
            let virtual_content_width =
                (lap_width + viewport_width - unit).max(lap_width - metrics.spacing);
            Self {
                has_enough_content,
                should_wrap,
                inset_width: config.inset_width,
                content_multiple: config.content_multiple,
                lap_width,
                virtual_content_width,
                leading_inset,
                leading_threshold: leading_inset,
                trailing_threshold: virtual_content_width - leading_inset,
            }
        }
    }

    /// Offset of the middle lap, where scrolling starts and jumps land.
    pub fn middle_lap_offset(&self) -> f64 {
        if !self.should_wrap {
            return 0.0;
        }
        f64::from(self.content_multiple / 2) * self.lap_width
    }

    /// One-shot content-offset delta for a raw scroll offset, if the offset
    /// has reached either threshold.
    pub fn correction_for(&self, raw_offset: f64) -> Option<f64> {
        if !self.should_wrap {
            return None;
        }
        if raw_offset >= self.trailing_threshold {
            Some(-self.middle_lap_offset())
        } else if raw_offset <= self.leading_threshold {
            Some(self.middle_lap_offset())
        } else {
            None
        }
    }
}
