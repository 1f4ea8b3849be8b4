//! Spacing negotiation
//!
//! Picks the gap between items so that, with one item centered, the nearest
//! off-screen neighbours peek in from both edges by a fixed fraction of their
//! width.

use crate::config::SpacingPolicy;
use tracing::trace;

/// Spacing before negotiation: the configured minimum plus half the growth of
/// a fully zoomed item, so zoomed neighbours never overlap.
pub fn baseline_spacing(item_width: f64, zoom_factor: f64, min_spacing: f64) -> f64 {
    min_spacing + item_width * zoom_factor / 2.0
}

/// Negotiate spacing for a viewport of `viewport_width`.
///
/// Works on half the viewport since the centered item splits it evenly: fit
/// as many whole items as possible between the centered item and the peeking
/// one, then spread the leftover space over the gaps. When the gaps come out
/// wider than the slack the peeking items would otherwise hide, they are
/// tightened by that slack so the peek matches `peeking_factor`.
///
/// Falls back to [`baseline_spacing`] when the viewport is absent or fewer
/// than two items fit.
pub fn negotiate_spacing(
    item_width: f64,
    zoom_factor: f64,
    min_spacing: f64,
    peeking_factor: f64,
    viewport_width: f64,
) -> f64 {
    let baseline = baseline_spacing(item_width, zoom_factor, min_spacing);
    if viewport_width <= 0.0 {
        return baseline;
    }

    let one_item = baseline + item_width;
    let half_viewport = viewport_width / 2.0;
    let peeking_width = item_width * peeking_factor;
    let middle_width = half_viewport - item_width / 2.0 - peeking_width;
    let middle_count = (middle_width / one_item).floor();

    // One centered item plus one peeking item.
    let total_count = middle_count + 2.0;
    if total_count < 2.0 {
        return baseline;
    }

    let content_width = middle_width + item_width * 2.0;
    let avail_space = content_width - total_count * item_width;
    let gaps = total_count - 1.0;
    let mut spacing = avail_space / gaps;

    let slack_width = item_width - peeking_width * 2.0;
    if spacing >= slack_width {
        spacing = (avail_space - slack_width) / gaps;
    }

    trace!(
        viewport_width,
        item_width,
        total_count,
        spacing,
        "negotiated item spacing"
    );
    spacing
}

/// Lazily computed, cached item spacing.
///
/// The cache is cleared by layout invalidation; an empty cache forces the
/// next [`SpacingNegotiator::resolve`] to negotiate again.
#[derive(Debug, Clone, Default)]
pub struct SpacingNegotiator {
    cached: Option<f64>,
}

impl SpacingNegotiator {
    /// Create a negotiator with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value, if any.
    pub fn cached(&self) -> Option<f64> {
        self.cached
    }

    /// Clear the cache.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Return the cached spacing or compute and cache it.
    ///
    /// An absent viewport yields the baseline without populating the cache.
    pub fn resolve(
        &mut self,
        policy: &SpacingPolicy,
        item_width: f64,
        zoom_factor: f64,
        viewport_width: f64,
    ) -> f64 {
        if let Some(spacing) = self.cached {
            return spacing;
        }

        let spacing = match *policy {
            SpacingPolicy::Fixed(spacing) => spacing,
            SpacingPolicy::Negotiated {
                min_spacing,
                peeking_factor,
            } => {
                if viewport_width <= 0.0 {
                    return baseline_spacing(item_width, zoom_factor, min_spacing);
                }
                negotiate_spacing(
                    item_width,
                    zoom_factor,
                    min_spacing,
                    peeking_factor,
                    viewport_width,
                )
            }
        };

        self.cached = Some(spacing);
        spacing
    }
}
