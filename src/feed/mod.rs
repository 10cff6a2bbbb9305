//! Video feed navigation: the active-item pointer and the filters that feed it.

mod filter;
mod navigator;

pub use filter::{subjects, FeedFilter, SubjectFilter, ALL_SUBJECTS};
pub use navigator::{compute_scroll_offset, FeedNavigator, Geometry, NavigatorError};
