//! Feed payload schema and merged feed items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::article::Article;
use super::thread::{Thread, ThreadView};

/// The upstream feed/search response, validated into a fixed schema at the
/// boundary: both lists are required-but-defaultable so downstream merging
/// never has to check alternative shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedPayload {
    /// Standalone and thread-member articles included in this page.
    #[serde(default)]
    pub articles: Vec<Article>,
    /// Threads included in this page.
    #[serde(default)]
    pub threads: Vec<Thread>,
}

/// One entry of a merged discovery feed: either a standalone article or a
/// thread carrying its resolved preview articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "item_type", rename_all = "snake_case")]
pub enum FeedItem {
    /// A standalone article.
    Article(Article),
    /// A thread with resolved previews.
    Thread(ThreadView),
}

impl FeedItem {
    /// The raw ordering timestamp: `published` for articles,
    /// `last_updated` for threads.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Article(article) => article.published_at(),
            Self::Thread(thread) => thread.last_updated_at(),
        }
    }

    /// The item's upstream identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Article(article) => &article.id,
            Self::Thread(thread) => &thread.id,
        }
    }
}

/// The aggregated content of one folder: standalone articles plus resolved
/// thread views. An article carried by a thread never repeats in
/// `articles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderContent {
    /// Standalone articles.
    pub articles: Vec<Article>,
    /// Resolved threads with preview articles.
    pub threads: Vec<ThreadView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_tolerates_missing_lists() {
        let payload: FeedPayload = serde_json::from_str("{}").expect("deserialize");
        assert!(payload.articles.is_empty());
        assert!(payload.threads.is_empty());
    }

    #[test]
    fn test_feed_item_tagging() {
        let thread: Thread = serde_json::from_str(
            r#"{"_id": "t1", "title": "T", "last_updated": "2024-01-02T00:00:00Z"}"#,
        )
        .expect("deserialize");
        let item = FeedItem::Thread(ThreadView::new(thread, Vec::new()));
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["item_type"], "thread");
        assert_eq!(json["id"], "t1");
    }
}
