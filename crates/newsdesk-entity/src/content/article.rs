//! External article DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article as served by the news content service.
///
/// The upstream wire format uses `_id` for the identifier and omits most
/// optional fields; everything beyond `_id` and `title` is defaulted so a
/// sparse payload still deserializes into this fixed schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Opaque upstream identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Article title.
    pub title: String,
    /// Source / publisher name.
    #[serde(default)]
    pub source: String,
    /// Author, when known.
    #[serde(default)]
    pub author: Option<String>,
    /// Publish timestamp, RFC 3339, when known.
    #[serde(default)]
    pub published: Option<String>,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Preview image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Topic tags.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Language code.
    #[serde(default)]
    pub language: Option<String>,
    /// View counter.
    #[serde(default)]
    pub views: Option<i64>,
    /// Comment counter.
    #[serde(rename = "commentsCount", default)]
    pub comments_count: Option<i64>,
    /// Credibility label assigned upstream.
    #[serde(default)]
    pub credibility_label: Option<String>,
}

impl Article {
    /// Parse the publish timestamp; unparseable or absent values sort as
    /// the UNIX epoch.
    pub fn published_at(&self) -> DateTime<Utc> {
        parse_timestamp(self.published.as_deref())
    }
}

/// Parse an upstream RFC 3339 timestamp, defaulting to the UNIX epoch.
pub(crate) fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}
