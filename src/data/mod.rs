mod loader;

pub use loader::{
    load_feed_from_json, load_questions_from_json, parse_feed, parse_questions, DataError,
    LoadError,
};
