//! Mutable per-instance layout state and its invalidation rules

use super::attributes::ItemMetrics;
use super::center::CenterTracker;
use super::invalidation::{CacheState, InvalidationContext};
use super::spacing::SpacingNegotiator;
use super::types::{ItemGeometry, ViewportContext};
use super::wrap::WrapDecision;
use crate::geometry::Size;

/// Inputs the cached geometry was built for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BuildKey {
    pub(crate) item_count: usize,
    pub(crate) viewport_size: Size,
    pub(crate) accessibility_active: bool,
}

impl BuildKey {
    /// Invalidation needed to move from this key to `next`.
    pub(crate) fn diff(&self, next: &BuildKey) -> InvalidationContext {
        InvalidationContext {
            invalidate_everything: false,
            invalidate_data_source_counts: self.item_count != next.item_count,
            bounds_size_changed: self.viewport_size != next.viewport_size,
            accessibility_changed: self.accessibility_active != next.accessibility_active,
        }
    }
}

/// State owned by one layout instance.
///
/// # Invariants
/// - `adjusted` is always a rotation of `base` (or empty).
/// - `has_centered_once == false` implies the tracker remembers nothing.
#[derive(Debug, Default)]
pub struct LayoutState {
    pub(crate) item_count: usize,
    pub(crate) base: Vec<ItemGeometry>,
    pub(crate) adjusted: Vec<ItemGeometry>,
    pub(crate) spacing: SpacingNegotiator,
    pub(crate) arc_radius: Option<f64>,
    pub(crate) metrics: Option<ItemMetrics>,
    pub(crate) wrap: Option<WrapDecision>,
    pub(crate) built_for: Option<BuildKey>,
    pub(crate) viewport: Option<ViewportContext>,
    pub(crate) tracker: CenterTracker,
    cache_state: CacheState,
    has_centered_once: bool,
}

impl LayoutState {
    /// Fresh, dirty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cache state.
    pub fn cache_state(&self) -> CacheState {
        self.cache_state
    }

    /// Whether initial placement already happened in this cycle.
    pub fn has_centered_once(&self) -> bool {
        self.has_centered_once
    }

    pub(crate) fn set_has_centered_once(&mut self, value: bool) {
        self.has_centered_once = value;
        if !value {
            self.tracker.reset();
        }
    }

    pub(crate) fn mark_clean(&mut self) {
        self.cache_state = CacheState::Clean;
    }

    /// Apply an invalidation. Returns true if caches were cleared.
    ///
    /// Buffers keep their allocations so the next rebuild reuses them.
    pub(crate) fn invalidate(&mut self, context: &InvalidationContext) -> bool {
        if !context.clears_caches() {
            return false;
        }
        self.base.clear();
        self.adjusted.clear();
        self.spacing.invalidate();
        self.metrics = None;
        self.wrap = None;
        self.built_for = None;
        self.arc_radius = None;
        self.cache_state = CacheState::Dirty;
        self.set_has_centered_once(false);
        true
    }
}
