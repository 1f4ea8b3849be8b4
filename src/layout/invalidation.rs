//! Layout invalidation

/// Whether the cached geometry is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheState {
    /// Caches are empty and must be rebuilt on the next pass.
    #[default]
    Dirty,
    /// Caches match the current inputs.
    Clean,
}

/// Why the layout is being invalidated.
///
/// Any set flag clears every cache. An empty context is a scroll-only
/// invalidation: the next pass re-runs the transform step on cached geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvalidationContext {
    /// Full invalidate requested by the host.
    pub invalidate_everything: bool,
    /// The data source's item count may have changed.
    pub invalidate_data_source_counts: bool,
    /// The viewport changed size, not just offset.
    pub bounds_size_changed: bool,
    /// An accessibility navigation mode was toggled.
    pub accessibility_changed: bool,
}

impl InvalidationContext {
    /// Scroll-only invalidation.
    pub fn scroll_only() -> Self {
        Self::default()
    }

    /// Full invalidate.
    pub fn everything() -> Self {
        Self {
            invalidate_everything: true,
            ..Self::default()
        }
    }

    /// Data reload.
    pub fn data_source_counts() -> Self {
        Self {
            invalidate_data_source_counts: true,
            ..Self::default()
        }
    }

    /// Viewport size change.
    pub fn bounds_size_changed() -> Self {
        Self {
            bounds_size_changed: true,
            ..Self::default()
        }
    }

    /// Accessibility navigation toggled.
    pub fn accessibility_changed() -> Self {
        Self {
            accessibility_changed: true,
            ..Self::default()
        }
    }

    /// Merge another context's flags into this one.
    pub fn merge(&mut self, other: InvalidationContext) {
        self.invalidate_everything |= other.invalidate_everything;
        self.invalidate_data_source_counts |= other.invalidate_data_source_counts;
        self.bounds_size_changed |= other.bounds_size_changed;
        self.accessibility_changed |= other.accessibility_changed;
    }

    /// True if this context must clear the caches.
    pub fn clears_caches(&self) -> bool {
        self.invalidate_everything
            || self.invalidate_data_source_counts
            || self.bounds_size_changed
            || self.accessibility_changed
    }
}
