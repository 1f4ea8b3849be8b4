//! Test harness for layout tests
//!
//! Provides fixture viewports, a delegate that records every callback, and a
//! `LayoutHarness` that plays the scroll owner for multi-pass tests.

use crate::config::LayoutConfig;
use crate::layout::{
    CenterEvent, ItemIndex, LayoutDelegate, LoopLayout, PassOutcome, ViewportContext,
};
use std::cell::RefCell;
use std::rc::Rc;

/// 300x100 viewport at offset zero.
pub fn plain_viewport() -> ViewportContext {
    ViewportContext::new(300.0, 100.0)
}

/// Callback recorded by [`RecordingDelegate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegateCall {
    Loaded(ItemIndex),
    Centered(ItemIndex),
}

/// Shared view of the calls a [`RecordingDelegate`] received.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<DelegateCall>>>,
}

impl CallLog {
    pub fn calls(&self) -> Vec<DelegateCall> {
        self.calls.borrow().clone()
    }

    pub fn loaded(&self) -> Vec<ItemIndex> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                DelegateCall::Loaded(index) => Some(*index),
                DelegateCall::Centered(_) => None,
            })
            .collect()
    }

    pub fn centered(&self) -> Vec<ItemIndex> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                DelegateCall::Centered(index) => Some(*index),
                DelegateCall::Loaded(_) => None,
            })
            .collect()
    }
}

/// Delegate that records callbacks and optionally chooses the initial item.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    initial: Option<ItemIndex>,
    log: CallLog,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(index: ItemIndex) -> Self {
        Self {
            initial: Some(index),
            log: CallLog::default(),
        }
    }

    /// Handle to the calls; stays valid after the delegate moves into a layout.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl LayoutDelegate for RecordingDelegate {
    fn initial_centered_index(&self, _item_count: usize) -> Option<ItemIndex> {
        self.initial
    }

    fn did_load_with_centered_index(&mut self, index: ItemIndex) {
        self.log.calls.borrow_mut().push(DelegateCall::Loaded(index));
    }

    fn did_center_index(&mut self, index: ItemIndex) {
        self.log.calls.borrow_mut().push(DelegateCall::Centered(index));
    }
}

/// Drives a layout the way a scroll surface would: applies initial offsets
/// and corrections to its own offset after every pass.
pub struct LayoutHarness {
    pub layout: LoopLayout,
    pub viewport: ViewportContext,
    pub item_count: usize,
    pub log: CallLog,
    pub events: Vec<CenterEvent>,
}

impl LayoutHarness {
    pub fn new(config: LayoutConfig, item_count: usize) -> Self {
        let delegate = RecordingDelegate::new();
        let log = delegate.log();
        Self {
            layout: LoopLayout::new(config).with_delegate(delegate),
            viewport: plain_viewport(),
            item_count,
            log,
            events: Vec::new(),
        }
    }

    /// Plain loop layout of `item_count` items.
    pub fn plain(item_count: usize) -> Self {
        Self::new(LayoutConfig::plain_loop(), item_count)
    }

    /// Run one pass at the current offset and apply what it asks for.
    pub fn pass(&mut self) -> PassOutcome {
        let outcome = self.layout.prepare(self.item_count, &self.viewport);
        if let Some(offset) = outcome.initial_offset {
            self.viewport.scroll_offset_x = offset;
        }
        if let Some(delta) = outcome.offset_correction {
            self.viewport.scroll_offset_x += delta;
        }
        if let Some(event) = outcome.center_event {
            self.events.push(event);
        }
        outcome
    }

    /// Scroll by `delta` and run a pass.
    pub fn scroll_by(&mut self, delta: f64) -> PassOutcome {
        self.viewport.scroll_offset_x += delta;
        self.pass()
    }

    pub fn offset(&self) -> f64 {
        self.viewport.scroll_offset_x
    }
}
