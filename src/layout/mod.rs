//! Layout layer - looping carousel geometry, wrapping, and center tracking
//!
//! The layout computes per-item geometry for a horizontally scrolling,
//! infinitely looping carousel. It never owns the scroll surface: each pass
//! receives a [`ViewportContext`] and returns a [`PassOutcome`] describing the
//! offset changes the host must apply.
//!
//! # Module Structure
//!
//! - `types`: Core value types (ItemIndex, ViewportContext, ItemGeometry)
//! - `spacing`: SpacingNegotiator - inter-item spacing with a peeking neighbour
//! - `attributes`: ItemMetrics and base geometry construction
//! - `wrap`: WrapDecision - loop feasibility, virtual bounds, offset correction
//! - `transform`: lap location, lap adjustment, arc and zoom transforms
//! - `center`: CenterTracker - centered item detection and one-shot events
//! - `invalidation`: CacheState and InvalidationContext
//! - `state`: LayoutState - caches owned by one layout
//! - `delegate`: LayoutDelegate - optional host callbacks
//! - `accessibility`: AccessibilityNotifier and its subscription guard
//! - `engine`: LoopLayout - the pass orchestrator and queries

pub mod accessibility;
pub mod attributes;
pub mod center;
pub mod delegate;
pub mod engine;
pub mod invalidation;
pub mod spacing;
pub mod state;
pub mod transform;
pub mod types;
pub mod wrap;

pub use accessibility::{AccessibilityNotifier, AccessibilitySubscription};
pub use attributes::ItemMetrics;
pub use center::{CenterEvent, CenterTracker};
pub use delegate::{LayoutDelegate, NoopDelegate};
pub use engine::{AccessibilityStep, LoopLayout, PassOutcome, StepTarget};
pub use invalidation::{CacheState, InvalidationContext};
pub use spacing::SpacingNegotiator;
pub use state::LayoutState;
pub use types::{ItemGeometry, ItemIndex, ViewportContext};
pub use wrap::WrapDecision;
