use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::Config;
use crate::feed::{compute_scroll_offset, subjects, FeedFilter, FeedNavigator, Geometry, NavigatorError};
use crate::models::FeedItem;

/// Whether keys browse the feed or edit the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedMode {
    #[default]
    Browse,
    Search,
}

/// Terminal state for the video feed.
///
/// Holds the unfiltered catalog, the current filter and a navigator over the
/// filtered items. Key repeat is throttled here: moves closer together than
/// the configured interval are dropped.
pub struct FeedApp {
    catalog: Vec<FeedItem>,
    subjects: Vec<String>,
    filter: FeedFilter,
    navigator: FeedNavigator<FeedItem>,
    mode: FeedMode,
    scroll_top: u16,
    card_height: u16,
    move_interval: Duration,
    last_move: Option<Instant>,
}

impl FeedApp {
    pub fn with_items(items: Vec<FeedItem>, config: &Config) -> Result<Self, NavigatorError> {
        let navigator = FeedNavigator::new(items.clone())?;
        Ok(Self {
            subjects: subjects(&items),
            catalog: items,
            filter: FeedFilter::default(),
            navigator,
            mode: FeedMode::Browse,
            scroll_top: 0,
            card_height: config.card_height.max(1),
            move_interval: config.move_interval(),
            last_move: None,
        })
    }

    pub fn navigator(&self) -> &FeedNavigator<FeedItem> {
        &self.navigator
    }

    pub fn filter(&self) -> &FeedFilter {
        &self.filter
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn mode(&self) -> FeedMode {
        self.mode
    }

    pub fn scroll_top(&self) -> u16 {
        self.scroll_top
    }

    pub fn card_height(&self) -> u16 {
        self.card_height
    }

    pub fn move_next(&mut self, now: Instant) -> bool {
        self.throttled_move(now, FeedNavigator::move_next)
    }

    pub fn move_previous(&mut self, now: Instant) -> bool {
        self.throttled_move(now, FeedNavigator::move_previous)
    }

    /// Jump to a visible card. Not throttled.
    pub fn set_active(&mut self, index: usize) -> bool {
        self.navigator.set_active(index)
    }

    pub fn next_subject(&mut self) {
        self.filter.cycle_subject(&self.subjects, true);
        self.refilter();
    }

    pub fn previous_subject(&mut self) {
        self.filter.cycle_subject(&self.subjects, false);
        self.refilter();
    }

    pub fn begin_search(&mut self) {
        self.mode = FeedMode::Search;
    }

    /// Leave search mode, keeping the query.
    pub fn finish_search(&mut self) {
        self.mode = FeedMode::Browse;
    }

    /// Leave search mode and drop the query.
    pub fn cancel_search(&mut self) {
        self.mode = FeedMode::Browse;
        if !self.filter.query().is_empty() {
            self.filter.clear_query();
            self.refilter();
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.push_query_char(c);
        self.refilter();
    }

    pub fn pop_search_char(&mut self) {
        self.filter.pop_query_char();
        self.refilter();
    }

    /// Scroll so the active card sits in the middle of a viewport
    /// `viewport_height` rows tall, clamped to the scrollable range.
    pub fn center_active(&mut self, viewport_height: u16) -> u16 {
        let Some(active) = self.navigator.active_index() else {
            self.scroll_top = 0;
            return 0;
        };

        let card = f64::from(self.card_height);
        let viewport = f64::from(viewport_height);
        let scroll = f64::from(self.scroll_top);

        let container = Geometry::new(0.0, viewport);
        let item = Geometry::new(active as f64 * card - scroll, card);
        let offset = compute_scroll_offset(container, item, scroll);

        let content = self.navigator.len() as f64 * card;
        let max_scroll = (content - viewport).clamp(0.0, f64::from(u16::MAX));
        self.scroll_top = offset.clamp(0.0, max_scroll).round() as u16;
        self.scroll_top
    }

    fn throttled_move(&mut self, now: Instant, step: fn(&mut FeedNavigator<FeedItem>) -> bool) -> bool {
        if let Some(last) = self.last_move {
            if now.saturating_duration_since(last) < self.move_interval {
                return false;
            }
        }
        let moved = step(&mut self.navigator);
        if moved {
            self.last_move = Some(now);
        }
        moved
    }

    fn refilter(&mut self) {
        let visible = self.filter.apply(&self.catalog);
        debug!(
            subject = self.filter.subject().label(),
            query = self.filter.query(),
            visible = visible.len(),
            "feed filter applied"
        );
        self.navigator.replace_items(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::SubjectFilter;

    fn items() -> Vec<FeedItem> {
        let subjects = ["Physics", "Biology", "Physics", "History", "Physics", "Biology", "Physics", "History"];
        subjects
            .iter()
            .enumerate()
            .map(|(i, subject)| FeedItem {
                id: i as u32 + 1,
                title: format!("Video {}", i + 1),
                thumbnail_url: String::new(),
                duration: "3:00".to_string(),
                views: "100".to_string(),
                subject: subject.to_string(),
            })
            .collect()
    }

    fn app(move_interval_ms: u64, card_height: u16) -> FeedApp {
        let config = Config {
            move_interval_ms,
            card_height,
            ..Config::default()
        };
        FeedApp::with_items(items(), &config).unwrap()
    }

    #[test]
    fn test_empty_feed_is_rejected() {
        assert!(FeedApp::with_items(Vec::new(), &Config::default()).is_err());
    }

    #[test]
    fn test_rapid_moves_are_throttled() {
        let mut app = app(150, 5);
        let start = Instant::now();

        assert!(app.move_next(start));
        assert!(!app.move_next(start + Duration::from_millis(40)));
        assert_eq!(app.navigator().active_index(), Some(1));

        assert!(app.move_next(start + Duration::from_millis(200)));
        assert_eq!(app.navigator().active_index(), Some(2));
    }

    #[test]
    fn test_blocked_move_does_not_reset_throttle() {
        let mut app = app(150, 5);
        let start = Instant::now();

        assert!(!app.move_previous(start));
        assert!(app.move_next(start + Duration::from_millis(10)));
    }

    #[test]
    fn test_subject_filter_reclamps_active_item() {
        let mut app = app(0, 5);
        app.set_active(6);

        app.next_subject();
        assert_eq!(app.filter().subject(), &SubjectFilter::Subject("Physics".to_string()));
        assert_eq!(app.navigator().len(), 4);
        assert_eq!(app.navigator().active_index(), Some(3));
        assert_eq!(app.navigator().active_item().map(|item| item.id), Some(7));
    }

    #[test]
    fn test_search_to_empty_and_back() {
        let mut app = app(0, 5);
        app.set_active(5);
        app.begin_search();
        for c in "zzz".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.navigator().active_index(), None);
        assert_eq!(app.center_active(20), 0);

        app.cancel_search();
        assert_eq!(app.mode(), FeedMode::Browse);
        assert_eq!(app.navigator().len(), 8);
        assert_eq!(app.navigator().active_index(), Some(0));
    }

    #[test]
    fn test_center_active_clamps_to_scroll_range() {
        let mut app = app(0, 4);
        assert_eq!(app.center_active(20), 0);

        app.set_active(4);
        assert_eq!(app.center_active(20), 8);
        assert_eq!(app.center_active(20), 8);

        app.set_active(7);
        assert_eq!(app.center_active(20), 12);
    }
}
