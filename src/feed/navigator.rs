//! Active-item pointer over the video feed.

use thiserror::Error;
use tracing::debug;

/// Errors raised when building a navigator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    #[error("a feed needs at least one item")]
    EmptyFeed,
}

/// Vertical placement of a box, in the caller's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub top: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Scroll-top value that vertically centers `item` inside `container`.
///
/// Both boxes are measured in viewport coordinates, that is after
/// `current_scroll_top` has already been applied. The result is not clamped
/// to the scrollable range.
pub fn compute_scroll_offset(container: Geometry, item: Geometry, current_scroll_top: f64) -> f64 {
    item.top - container.top - (container.height / 2.0 - item.height / 2.0) + current_scroll_top
}

/// Tracks which feed item is active.
///
/// The active index is `None` only while the item list is empty. Every
/// boundary condition is absorbed as a no-op or a clamp.
#[derive(Debug, Clone)]
pub struct FeedNavigator<T> {
    items: Vec<T>,
    active_index: Option<usize>,
}

impl<T> FeedNavigator<T> {
    /// Create a navigator with the first item active.
    pub fn new(items: Vec<T>) -> Result<Self, NavigatorError> {
        if items.is_empty() {
            return Err(NavigatorError::EmptyFeed);
        }
        Ok(Self {
            items,
            active_index: Some(0),
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_item(&self) -> Option<&T> {
        self.active_index.and_then(|index| self.items.get(index))
    }

    /// Activate the following item. Returns whether the index changed.
    pub fn move_next(&mut self) -> bool {
        match self.active_index {
            Some(index) if index + 1 < self.items.len() => self.activate(index + 1),
            _ => false,
        }
    }

    /// Activate the preceding item. Returns whether the index changed.
    pub fn move_previous(&mut self) -> bool {
        match self.active_index {
            Some(index) if index > 0 => self.activate(index - 1),
            _ => false,
        }
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.items.len() || self.active_index == Some(index) {
            return false;
        }
        self.activate(index)
    }

    /// Swap in a new item list, typically after the caller re-filters.
    ///
    /// The active index is clamped to the new bounds; an empty list leaves no
    /// active item and a non-empty list after an empty one starts at 0.
    pub fn replace_items(&mut self, items: Vec<T>) {
        let previous = self.active_index;
        self.items = items;
        self.active_index = match self.items.len() {
            0 => None,
            len => Some(previous.map_or(0, |index| index.min(len - 1))),
        };
        debug!(
            items = self.items.len(),
            ?previous,
            active = ?self.active_index,
            "feed items replaced"
        );
    }

    fn activate(&mut self, index: usize) -> bool {
        debug!(from = ?self.active_index, to = index, "active feed item changed");
        self.active_index = Some(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(len: u32) -> FeedNavigator<u32> {
        FeedNavigator::new((1..=len).collect()).unwrap()
    }

    #[test]
    fn test_empty_feed_is_rejected() {
        assert_eq!(
            FeedNavigator::<u32>::new(Vec::new()).unwrap_err(),
            NavigatorError::EmptyFeed
        );
    }

    #[test]
    fn test_move_previous_at_start_is_noop() {
        let mut nav = feed(8);
        assert!(!nav.move_previous());
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn test_move_next_at_end_is_noop() {
        let mut nav = feed(8);
        assert!(nav.set_active(7));
        assert!(!nav.move_next());
        assert_eq!(nav.active_index(), Some(7));
        assert_eq!(nav.active_item(), Some(&8));
    }

    #[test]
    fn test_moves_step_by_one() {
        let mut nav = feed(3);
        assert!(nav.move_next());
        assert!(nav.move_next());
        assert_eq!(nav.active_index(), Some(2));
        assert!(nav.move_previous());
        assert_eq!(nav.active_index(), Some(1));
    }

    #[test]
    fn test_set_active_rejects_out_of_bounds() {
        let mut nav = feed(4);
        assert!(nav.set_active(2));
        assert!(!nav.set_active(4));
        assert!(!nav.set_active(2));
        assert_eq!(nav.active_index(), Some(2));
    }

    #[test]
    fn test_shrinking_filter_clamps_active_index() {
        let mut nav = feed(8);
        nav.set_active(6);
        nav.replace_items(vec![1, 2, 3]);
        assert_eq!(nav.active_index(), Some(2));
    }

    #[test]
    fn test_growing_filter_keeps_active_index() {
        let mut nav = feed(3);
        nav.set_active(1);
        nav.replace_items((1..=8).collect());
        assert_eq!(nav.active_index(), Some(1));
    }

    #[test]
    fn test_empty_filter_has_no_active_item() {
        let mut nav = feed(8);
        nav.set_active(5);
        nav.replace_items(Vec::new());

        assert!(nav.is_empty());
        assert_eq!(nav.active_index(), None);
        assert_eq!(nav.active_item(), None);
        assert!(!nav.move_next());
        assert!(!nav.move_previous());
        assert!(!nav.set_active(0));

        nav.replace_items(vec![10, 20]);
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn test_active_index_stays_in_bounds() {
        let mut nav = feed(8);
        let lengths = [8, 5, 1, 0, 3, 8, 2];
        for (step, len) in lengths.iter().enumerate() {
            for _ in 0..step + 2 {
                nav.move_next();
            }
            nav.set_active(step * 3);
            nav.move_previous();
            nav.replace_items((0..*len).collect());

            match nav.active_index() {
                Some(index) => assert!(index < nav.len()),
                None => assert!(nav.is_empty()),
            }
        }
    }

    #[test]
    fn test_scroll_offset_centers_item() {
        let offset = compute_scroll_offset(Geometry::new(0.0, 600.0), Geometry::new(700.0, 200.0), 0.0);
        assert_eq!(offset, 500.0);
    }

    #[test]
    fn test_scroll_offset_accounts_for_existing_scroll() {
        let container = Geometry::new(80.0, 400.0);
        let item = Geometry::new(130.0, 100.0);
        let offset = compute_scroll_offset(container, item, 250.0);
        assert_eq!(offset, 150.0);
        assert_eq!(compute_scroll_offset(container, item, 250.0), offset);
    }
}
