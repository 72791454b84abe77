//! The content gateway seam.

use async_trait::async_trait;
use serde::Serialize;

use newsdesk_core::result::AppResult;
use newsdesk_entity::content::{Article, FeedPayload, Thread};

/// Query parameters forwarded to the upstream `/feed` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FeedQuery {
    /// `"articles"`, `"threads"`, or `"both"`.
    pub feed_type: String,
    /// Comma-separated topic filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<String>,
    /// Comma-separated language-code filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    /// Upstream page number (1-based).
    pub page: u64,
    /// Upstream page size.
    pub size: u64,
    /// Upstream sort field.
    pub sort: String,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            feed_type: "both".to_string(),
            topics: None,
            languages: None,
            page: 1,
            size: 10,
            sort: "published".to_string(),
        }
    }
}

/// Query parameters forwarded verbatim to the upstream `/search` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    /// Search terms.
    pub q: String,
    /// `"articles"`, `"threads"`, or `"both"`.
    pub view: String,
    /// Upstream sort field.
    pub sort: String,
    /// Comma-separated topic filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<String>,
    /// Upstream page number (1-based).
    pub page: u64,
    /// Upstream page size.
    pub size: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            view: "both".to_string(),
            sort: "published".to_string(),
            topics: None,
            page: 1,
            size: 20,
        }
    }
}

/// Read access to the external news content service.
///
/// The `resolve_*` methods implement the enrichment contract: any failure
/// (transport, non-2xx, decode) is absorbed into `None` so one bad id
/// never fails a batch. The `fetch_*` methods are for primary fetches the
/// caller explicitly requested; their failures are fatal bad-gateway
/// errors.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Look up one article for enrichment; `None` on any failure.
    async fn resolve_article(&self, id: &str) -> Option<Article>;

    /// Look up one thread for enrichment; `None` on any failure.
    async fn resolve_thread(&self, id: &str) -> Option<Thread>;

    /// Fetch one article as the primary subject of a request.
    async fn fetch_article(&self, id: &str) -> AppResult<Article>;

    /// Fetch one thread as the primary subject of a request.
    async fn fetch_thread(&self, id: &str) -> AppResult<Thread>;

    /// Fetch a feed page; fatal on failure.
    async fn fetch_feed(&self, query: &FeedQuery) -> AppResult<FeedPayload>;

    /// Run a search, forwarding paging parameters verbatim; fatal on
    /// failure.
    async fn search(&self, query: &SearchQuery) -> AppResult<FeedPayload>;
}
