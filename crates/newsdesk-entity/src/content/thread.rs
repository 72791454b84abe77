//! External thread DTO and its display form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::article::{Article, parse_timestamp};

/// A thread as served by the news content service: an ordered grouping of
/// related articles, referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Opaque upstream identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Thread title.
    pub title: String,
    /// Last-updated timestamp, RFC 3339.
    #[serde(default)]
    pub last_updated: Option<String>,
    /// Ordered member article ids.
    #[serde(default)]
    pub articles: Vec<String>,
    /// Topic tag.
    #[serde(default)]
    pub topic: Option<String>,
    /// Preview image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Language code.
    #[serde(default)]
    pub language: Option<String>,
}

impl Thread {
    /// Parse the last-updated timestamp; unparseable or absent values sort
    /// as the UNIX epoch.
    pub fn last_updated_at(&self) -> DateTime<Utc> {
        parse_timestamp(self.last_updated.as_deref())
    }
}

/// A thread prepared for display: the thread fields plus its resolved
/// preview articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadView {
    /// Opaque upstream identifier.
    pub id: String,
    /// Thread title.
    pub title: String,
    /// Last-updated timestamp, RFC 3339.
    pub last_updated: Option<String>,
    /// Topic tag.
    pub topic: Option<String>,
    /// Preview image URL.
    pub image: Option<String>,
    /// Resolved preview articles (member ids that could not be resolved
    /// are omitted).
    pub articles: Vec<Article>,
}

impl ThreadView {
    /// Build a view from a thread and its resolved preview articles.
    pub fn new(thread: Thread, articles: Vec<Article>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            last_updated: thread.last_updated,
            topic: thread.topic,
            image: thread.image,
            articles,
        }
    }

    /// Parse the last-updated timestamp for ordering.
    pub fn last_updated_at(&self) -> DateTime<Utc> {
        parse_timestamp(self.last_updated.as_deref())
    }
}
