//! Accessibility status notifications
//!
//! The host owns an [`AccessibilityNotifier`] and posts status changes to it.
//! A layout subscribes once at construction and holds the returned
//! [`AccessibilitySubscription`]; dropping the subscription deregisters it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::debug;

#[derive(Debug, Default)]
struct NotifierInner {
    navigation_active: bool,
    next_id: u64,
    listeners: Vec<(u64, Rc<Cell<bool>>)>,
}

/// Single-threaded broadcaster of accessibility navigation status changes.
///
/// Cloning yields another handle to the same notifier.
#[derive(Debug, Clone, Default)]
pub struct AccessibilityNotifier {
    inner: Rc<RefCell<NotifierInner>>,
}

impl AccessibilityNotifier {
    /// Notifier with the given initial status.
    pub fn new(navigation_active: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NotifierInner {
                navigation_active,
                ..NotifierInner::default()
            })),
        }
    }

    /// Current status.
    pub fn is_navigation_active(&self) -> bool {
        self.inner.borrow().navigation_active
    }

    /// Update the status. Subscribers are flagged only if it actually changed.
    pub fn set_navigation_active(&self, active: bool) {
        let mut inner = self.inner.borrow_mut();
        if inner.navigation_active == active {
            return;
        }
        inner.navigation_active = active;
        debug!(
            active,
            listeners = inner.listeners.len(),
            "accessibility navigation status changed"
        );
        for (_, pending) in &inner.listeners {
            pending.set(true);
        }
    }

    /// Register a listener.
    pub fn subscribe(&self) -> AccessibilitySubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let pending = Rc::new(Cell::new(false));
        inner.listeners.push((id, Rc::clone(&pending)));
        AccessibilitySubscription {
            id,
            pending,
            source: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// A registration with an [`AccessibilityNotifier`], released on drop.
#[derive(Debug)]
pub struct AccessibilitySubscription {
    id: u64,
    pending: Rc<Cell<bool>>,
    source: Weak<RefCell<NotifierInner>>,
}

impl AccessibilitySubscription {
    /// Return whether a change was posted since the last call, clearing the flag.
    pub fn take_pending(&self) -> bool {
        self.pending.replace(false)
    }

    /// Current status of the source, or `None` if the notifier is gone.
    pub fn navigation_active(&self) -> Option<bool> {
        self.source
            .upgrade()
            .map(|inner| inner.borrow().navigation_active)
    }
}

impl Drop for AccessibilitySubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.source.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
