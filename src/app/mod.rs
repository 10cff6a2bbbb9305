//! Per-view application state driven by the terminal event loop.

mod feed;
mod quiz;

pub use feed::{FeedApp, FeedMode};
pub use quiz::QuizApp;
