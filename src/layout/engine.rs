//! `LoopLayout` - runs one layout pass and answers geometry queries
//!
//! A pass goes through these steps in order:
//!
//! 1. detect invalidation (item count, viewport size, accessibility)
//! 2. rebuild caches if dirty (item size, spacing, arc radius, wrap decision, base geometry)
//! 3. initial placement, once per invalidation cycle
//! 4. offset correction at the wrap thresholds
//! 5. lap adjustment and arc/zoom transforms
//! 6. center tracking and delegate notification

use super::accessibility::{AccessibilityNotifier, AccessibilitySubscription};
use super::attributes::{build_base_geometries, ItemMetrics};
use super::center::{closest_to_center, CenterEvent};
use super::delegate::{default_initial_index, LayoutDelegate, NoopDelegate};
use super::invalidation::{CacheState, InvalidationContext};
use super::state::{BuildKey, LayoutState};
use super::transform::{adjust_geometries, locate, TransformEngine};
use super::types::{ItemGeometry, ItemIndex, ViewportContext};
use super::wrap::WrapDecision;
use crate::config::LayoutConfig;
use crate::geometry::{arc_translation_origin, Rect, Size};
use serde::Serialize;
use tracing::{debug, trace, warn};

/// What the host must act on after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PassOutcome {
    /// Absolute scroll offset to apply immediately (first pass of a cycle).
    pub initial_offset: Option<f64>,
    /// Delta to add to the scroll offset; the content looks identical after it.
    pub offset_correction: Option<f64>,
    /// Centered item notification produced by this pass.
    pub center_event: Option<CenterEvent>,
}

/// Direction of a sequential accessibility adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessibilityStep {
    /// Move to the next item.
    Increment,
    /// Move to the previous item.
    Decrement,
}

/// Item to move to and the scroll offset that centers it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepTarget {
    /// Item that becomes centered.
    pub index: ItemIndex,
    /// Scroll offset that centers it in the current lap.
    pub offset: f64,
}

/// Infinitely looping horizontal carousel layout.
pub struct LoopLayout {
    config: LayoutConfig,
    state: LayoutState,
    delegate: Box<dyn LayoutDelegate>,
    accessibility: Option<AccessibilitySubscription>,
}

impl std::fmt::Debug for LoopLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopLayout")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("accessibility", &self.accessibility)
            .finish_non_exhaustive()
    }
}

impl Default for LoopLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LoopLayout {
    /// Layout with no delegate and no accessibility subscription.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            state: LayoutState::new(),
            delegate: Box::new(NoopDelegate),
            accessibility: None,
        }
    }

    /// Attach a delegate.
    pub fn with_delegate(mut self, delegate: impl LayoutDelegate + 'static) -> Self {
        self.delegate = Box::new(delegate);
        self
    }

    /// Subscribe to accessibility status changes. The subscription lives as
    /// long as the layout.
    pub fn with_accessibility_notifier(mut self, notifier: &AccessibilityNotifier) -> Self {
        self.accessibility = Some(notifier.subscribe());
        self
    }

    /// Tunables this layout was built with.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Run one layout pass.
    pub fn prepare(&mut self, item_count: usize, viewport: &ViewportContext) -> PassOutcome {
        if viewport.is_absent() {
            warn!(
                width = viewport.width,
                height = viewport.height,
                "layout pass without a usable viewport"
            );
            self.state.adjusted.clear();
            self.state.viewport = None;
            return PassOutcome::default();
        }

        self.detect_invalidation(item_count, viewport);
        if self.state.cache_state() == CacheState::Dirty {
            self.rebuild(item_count, viewport);
        }

        let mut outcome = PassOutcome::default();
        let mut effective = *viewport;

        if self.state.item_count == 0 {
            self.state.adjusted.clear();
            self.state.viewport = Some(effective);
            return outcome;
        }

        if let Some(offset) = self.initial_placement(effective.width) {
            outcome.initial_offset = Some(offset);
            effective.scroll_offset_x = offset;
        } else if let Some(wrap) = self.state.wrap {
            outcome.offset_correction = wrap.correction_for(effective.scroll_offset_x);
            if let Some(delta) = outcome.offset_correction {
                debug!(
                    raw_offset = effective.scroll_offset_x,
                    delta, "scroll offset crossed a wrap threshold"
                );
            }
        }

        self.layout_at(&effective);
        self.state.viewport = Some(effective);

        let closest = self.closest_index_to_center();
        outcome.center_event = self.state.tracker.observe(closest);
        match outcome.center_event {
            Some(CenterEvent::Loaded(index)) => {
                debug!(%index, "centered item loaded");
                self.delegate.did_load_with_centered_index(index);
            }
            Some(CenterEvent::Changed(index)) => {
                trace!(%index, "centered item changed");
                self.delegate.did_center_index(index);
            }
            None => {}
        }

        trace!(
            offset = effective.scroll_offset_x,
            items = self.state.adjusted.len(),
            "layout pass"
        );
        outcome
    }

    /// Invalidate the layout. Contexts with no flag set only cause the next
    /// pass to recompute transforms.
    pub fn invalidate(&mut self, context: &InvalidationContext) {
        if self.state.invalidate(context) {
            debug!(?context, "layout caches cleared");
        } else {
            trace!("scroll-only invalidation");
        }
    }

    fn accessibility_active(&self, viewport: &ViewportContext) -> bool {
        let posted = self
            .accessibility
            .as_ref()
            .and_then(AccessibilitySubscription::navigation_active)
            .unwrap_or(false);
        viewport.accessibility_navigation_active || posted
    }

    fn build_key(&self, item_count: usize, viewport: &ViewportContext) -> BuildKey {
        BuildKey {
            item_count,
            viewport_size: viewport.size(),
            accessibility_active: self.accessibility_active(viewport),
        }
    }

    fn detect_invalidation(&mut self, item_count: usize, viewport: &ViewportContext) {
        let key = self.build_key(item_count, viewport);
        let mut context = self
            .state
            .built_for
            .map(|built| built.diff(&key))
            .unwrap_or_default();
        if let Some(subscription) = &self.accessibility {
            if subscription.take_pending() {
                context.merge(InvalidationContext::accessibility_changed());
            }
        }
        if context.clears_caches() {
            self.invalidate(&context);
        }
    }

    fn rebuild(&mut self, item_count: usize, viewport: &ViewportContext) {
        let key = self.build_key(item_count, viewport);
        let item_size = self.config.item_sizing.resolve(viewport.height);
        let spacing = self.state.spacing.resolve(
            &self.config.spacing,
            item_size.width,
            self.config.zoom_factor,
            viewport.width,
        );
        let metrics = ItemMetrics {
            item_size,
            spacing,
            zoom_factor: self.config.zoom_factor,
        };
        let wrap = WrapDecision::evaluate(
            item_count,
            &metrics,
            viewport.width,
            &self.config,
            key.accessibility_active,
        );

        self.state.arc_radius = self
            .config
            .arc_intersect_fraction
            .map(|fraction| arc_translation_origin(viewport.height, viewport.width, fraction));
        build_base_geometries(item_count, &metrics, wrap.leading_inset, &mut self.state.base);

        self.state.item_count = item_count;
        self.state.metrics = Some(metrics);
        self.state.wrap = Some(wrap);
        self.state.built_for = Some(key);
        self.state.mark_clean();

        debug!(
            item_count,
            spacing,
            should_wrap = wrap.should_wrap,
            virtual_width = wrap.virtual_content_width,
            "layout caches rebuilt"
        );
    }

    /// Offset centering the initial item, once per invalidation cycle.
    fn initial_placement(&mut self, viewport_width: f64) -> Option<f64> {
        if self.state.has_centered_once() {
            return None;
        }
        let wrap = self.state.wrap?;
        let item_count = self.state.item_count;

        let fallback = default_initial_index(item_count);
        let index = match self.delegate.initial_centered_index(item_count) {
            Some(index) if index.get() < item_count => index,
            Some(index) => {
                warn!(%index, item_count, "initial centered index out of range, using default");
                fallback
            }
            None => fallback,
        };

        let base = self.state.base.get(index.get())?;
        let offset = base.center.x + wrap.middle_lap_offset() - viewport_width / 2.0;
        self.state.set_has_centered_once(true);
        debug!(%index, offset, "initial placement");
        Some(offset)
    }

    fn layout_at(&mut self, viewport: &ViewportContext) {
        let (Some(metrics), Some(wrap)) = (self.state.metrics, self.state.wrap) else {
            self.state.adjusted.clear();
            return;
        };
        let Some(position) = locate(
            viewport.scroll_offset_x,
            wrap.leading_inset,
            metrics.unit_width(),
            self.state.item_count,
        ) else {
            self.state.adjusted.clear();
            return;
        };

        adjust_geometries(
            &self.state.base,
            position,
            &metrics,
            wrap.lap_width,
            wrap.should_wrap,
            &mut self.state.adjusted,
        );
        TransformEngine::new(&metrics, viewport.width, &self.config, self.state.arc_radius)
            .apply(&mut self.state.adjusted, viewport.mid_x());
    }

    /// Geometries whose untransformed frame intersects `rect`.
    pub fn elements_in_rect(&self, rect: &Rect) -> Vec<&ItemGeometry> {
        self.state
            .adjusted
            .iter()
            .filter(|geometry| rect.intersects(&geometry.frame()))
            .collect()
    }

    /// Geometry of one item in the current pass.
    pub fn geometry_for_item(&self, index: ItemIndex) -> Option<&ItemGeometry> {
        self.state.adjusted.iter().find(|geometry| geometry.index == index)
    }

    /// Geometries intersecting the last pass's visible rectangle.
    pub fn visible_geometries(&self) -> Vec<&ItemGeometry> {
        match &self.state.viewport {
            Some(viewport) => self.elements_in_rect(&viewport.visible_rect()),
            None => Vec::new(),
        }
    }

    /// All geometries of the current pass, in adjusted order.
    pub fn geometries(&self) -> &[ItemGeometry] {
        &self.state.adjusted
    }

    /// Scrollable content size.
    pub fn content_size(&self) -> Size {
        match (&self.state.viewport, &self.state.wrap) {
            (Some(viewport), Some(wrap)) => Size::new(wrap.virtual_content_width, viewport.height),
            _ => Size::ZERO,
        }
    }

    /// Item nearest the viewport center in the current pass.
    pub fn closest_index_to_center(&self) -> Option<ItemIndex> {
        let viewport = self.state.viewport.as_ref()?;
        let metrics = self.state.metrics.as_ref()?;
        closest_to_center(
            &self.state.adjusted,
            viewport.mid_x(),
            viewport.height,
            metrics.unit_width(),
        )
    }

    /// Wrap decision from the last rebuild.
    pub fn wrap_decision(&self) -> Option<&WrapDecision> {
        self.state.wrap.as_ref()
    }

    /// Resolved spacing between adjacent items.
    pub fn item_spacing(&self) -> Option<f64> {
        self.state.metrics.map(|metrics| metrics.spacing)
    }

    /// Untransformed item size.
    pub fn item_size(&self) -> Option<Size> {
        self.state.metrics.map(|metrics| metrics.item_size)
    }

    /// Item size at full zoom.
    pub fn max_item_size(&self) -> Option<Size> {
        self.state.metrics.map(|metrics| metrics.max_item_size())
    }

    /// Radius of the arc items are translated onto, if enabled.
    pub fn arc_radius(&self) -> Option<f64> {
        self.state.arc_radius
    }

    /// Item count the caches were built for.
    pub fn item_count(&self) -> usize {
        self.state.item_count
    }

    /// Whether the next pass rebuilds.
    pub fn cache_state(&self) -> CacheState {
        self.state.cache_state()
    }

    /// Initial placement already happened in this invalidation cycle.
    pub fn has_centered_once(&self) -> bool {
        self.state.has_centered_once()
    }

    /// Last item reported as centered.
    pub fn last_centered_index(&self) -> Option<ItemIndex> {
        self.state.tracker.last()
    }

    /// Snap a proposed resting offset so an item ends up centered.
    ///
    /// Returns `proposed` unchanged before the first pass. When not wrapping
    /// the target stays within the first and last item and inside the
    /// scrollable range.
    pub fn target_content_offset(&self, proposed: f64, velocity: f64) -> f64 {
        let (Some(viewport), Some(metrics), Some(wrap)) =
            (&self.state.viewport, &self.state.metrics, &self.state.wrap)
        else {
            return proposed;
        };
        let item_count = self.state.item_count;
        if item_count == 0 {
            return proposed;
        }

        let unit = metrics.unit_width();
        let first_center = wrap.leading_inset + metrics.item_size.width / 2.0;
        let half_width = viewport.width / 2.0;
        let mut slot = ((proposed + half_width - first_center) / unit).round();
        if !wrap.should_wrap {
            slot = slot.clamp(0.0, (item_count - 1) as f64);
        }

        let mut target = first_center + slot * unit - half_width;
        if !wrap.should_wrap {
            let max_offset = (wrap.virtual_content_width - viewport.width).max(0.0);
            target = target.clamp(0.0, max_offset);
        }
        trace!(proposed, velocity, target, "snapped target offset");
        target
    }

    /// Scroll offset that centers `index` in the lap nearest the current center.
    pub fn offset_centering(&self, index: ItemIndex) -> Option<f64> {
        let viewport = self.state.viewport.as_ref()?;
        let wrap = self.state.wrap.as_ref()?;
        let base = self.state.base.get(index.get())?;

        let mut center = base.center.x;
        if wrap.should_wrap && wrap.lap_width > 0.0 {
            let laps = ((viewport.mid_x() - center) / wrap.lap_width).round();
            center += laps * wrap.lap_width;
        }
        Some(center - viewport.width / 2.0)
    }

    /// Linear step from the centered item, without wrapping past either end.
    pub fn accessibility_step(&self, step: AccessibilityStep) -> Option<StepTarget> {
        let current = self.closest_index_to_center()?;
        let index = match step {
            AccessibilityStep::Increment => current.next(self.state.item_count)?,
            AccessibilityStep::Decrement => current.prev()?,
        };
        let offset = self.offset_centering(index)?;
        Some(StepTarget { index, offset })
    }
}
