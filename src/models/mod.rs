mod feed;
mod question;

pub use feed::FeedItem;
pub use question::Question;

/// Which quiz screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Welcome,
    Quiz,
    Result,
}
