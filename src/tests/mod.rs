//! Internal test modules - whitebox tests with crate access
//!
//! Multi-pass tests driven through `LayoutHarness`, checking invariants
//! that only show up across invalidation cycles and long scroll sessions.

mod center_notifications;
