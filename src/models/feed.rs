use serde::{Deserialize, Serialize};

/// A video snippet shown in the feed.
///
/// Only `id` has meaning to the navigator; the rest is display payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: u32,
    pub title: String,
    #[serde(default, alias = "thumbnailUrl")]
    pub thumbnail_url: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub subject: String,
}
