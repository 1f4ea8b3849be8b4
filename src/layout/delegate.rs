//! Optional host callbacks

use super::types::ItemIndex;

/// Capabilities a host may provide to the layout.
///
/// Every method has a default, so implementors override only what they need.
pub trait LayoutDelegate {
    /// Item to center when the layout first places content.
    ///
    /// `None` selects the default: item 1 when there are at least two items,
    /// otherwise item 0.
    fn initial_centered_index(&self, item_count: usize) -> Option<ItemIndex> {
        let _ = item_count;
        None
    }

    /// The first centered item after creation or invalidation is known.
    fn did_load_with_centered_index(&mut self, index: ItemIndex) {
        let _ = index;
    }

    /// The centered item changed.
    fn did_center_index(&mut self, index: ItemIndex) {
        let _ = index;
    }
}

/// Delegate that accepts every default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDelegate;

impl LayoutDelegate for NoopDelegate {}

/// Default initial item when the delegate has no preference.
pub fn default_initial_index(item_count: usize) -> ItemIndex {
    ItemIndex::new(if item_count > 1 { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefers_second_item() {
        assert_eq!(default_initial_index(20), ItemIndex::new(1));
        assert_eq!(default_initial_index(2), ItemIndex::new(1));
    }

    #[test]
    fn default_single_item_is_first() {
        assert_eq!(default_initial_index(1), ItemIndex::new(0));
    }

    #[test]
    fn noop_delegate_has_no_preference() {
        assert_eq!(NoopDelegate.initial_centered_index(10), None);
    }
}
