//! Feed service — upstream discovery feed with merged, paginated output.

use std::sync::Arc;

use newsdesk_core::result::AppResult;
use newsdesk_core::types::pagination::PageResponse;
use newsdesk_entity::content::{Article, FeedItem, FeedPayload, Thread};
use newsdesk_gateway::{ContentGateway, FeedQuery, SearchQuery};

use crate::content::AggregationService;

/// Items per page of the merged discovery feed. Pagination happens here,
/// after merging, so page boundaries reflect the combined ordering
/// rather than the upstream's.
pub const FEED_PAGE_SIZE: u64 = 15;

/// Service producing the merged discovery feed, search results, and
/// single-item content lookups.
pub struct FeedService {
    gateway: Arc<dyn ContentGateway>,
    aggregation: Arc<AggregationService>,
}

impl FeedService {
    /// Creates a new feed service.
    pub fn new(gateway: Arc<dyn ContentGateway>, aggregation: Arc<AggregationService>) -> Self {
        Self {
            gateway,
            aggregation,
        }
    }

    /// Fetch one page of the merged discovery feed.
    ///
    /// The primary upstream fetch is fatal; only per-member enrichment
    /// inside the merge is allowed to degrade.
    pub async fn discover(
        &self,
        query: &FeedQuery,
        page: u64,
    ) -> AppResult<PageResponse<FeedItem>> {
        let payload = self.gateway.fetch_feed(query).await?;
        let items = self.aggregation.merge_feed(payload).await;
        Ok(PageResponse::slice(items, page, FEED_PAGE_SIZE))
    }

    /// Run an upstream search, forwarding the query verbatim. The
    /// payload passes through unmerged.
    pub async fn search(&self, query: &SearchQuery) -> AppResult<FeedPayload> {
        self.gateway.search(query).await
    }

    /// Fetch one article as the primary subject of a request; upstream
    /// failure is fatal.
    pub async fn article(&self, id: &str) -> AppResult<Article> {
        self.gateway.fetch_article(id).await
    }

    /// Fetch one thread as the primary subject of a request; upstream
    /// failure is fatal.
    pub async fn thread(&self, id: &str) -> AppResult<Thread> {
        self.gateway.fetch_thread(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockGateway, article, thread};
    use newsdesk_core::error::ErrorKind;

    fn service(gateway: MockGateway) -> FeedService {
        let gateway = Arc::new(gateway);
        let aggregation = Arc::new(AggregationService::new(gateway.clone()));
        FeedService::new(gateway, aggregation)
    }

    fn feed_of(count: usize) -> FeedPayload {
        FeedPayload {
            articles: (0..count)
                .map(|i| {
                    article(
                        &format!("a{i}"),
                        Some(&format!("2024-01-{:02}T00:00:00Z", (i % 28) + 1)),
                    )
                })
                .collect(),
            threads: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_discover_paginates_after_merge() {
        let svc = service(MockGateway::default().with_feed(feed_of(31)));

        let first = svc.discover(&FeedQuery::default(), 1).await.expect("page 1");
        assert_eq!(first.items.len(), 15);
        assert_eq!(first.total_pages, 3);

        let last = svc.discover(&FeedQuery::default(), 3).await.expect("page 3");
        assert_eq!(last.items.len(), 1);
    }

    #[tokio::test]
    async fn test_discover_out_of_range_page_is_empty() {
        let svc = service(MockGateway::default().with_feed(feed_of(31)));

        let page = svc.discover(&FeedQuery::default(), 4).await.expect("page 4");
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_discover_empty_feed_has_zero_pages() {
        let svc = service(MockGateway::default().with_feed(FeedPayload::default()));

        let page = svc.discover(&FeedQuery::default(), 1).await.expect("page 1");
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_discover_upstream_failure_is_fatal() {
        let svc = service(MockGateway::default());

        let err = svc
            .discover(&FeedQuery::default(), 1)
            .await
            .expect_err("no upstream feed");
        assert_eq!(err.kind, ErrorKind::BadGateway);
    }

    #[tokio::test]
    async fn test_article_lookup_passes_through() {
        let svc = service(
            MockGateway::default()
                .with_article(article("a1", None))
                .with_thread(thread("t1", &["a1"], None)),
        );

        let found = svc.article("a1").await.expect("article");
        assert_eq!(found.id, "a1");
        let found = svc.thread("t1").await.expect("thread");
        assert_eq!(found.articles, ["a1"]);
    }

    #[tokio::test]
    async fn test_missing_article_is_bad_gateway() {
        let svc = service(MockGateway::default());

        let err = svc.article("gone").await.expect_err("no article");
        assert_eq!(err.kind, ErrorKind::BadGateway);
        let err = svc.thread("gone").await.expect_err("no thread");
        assert_eq!(err.kind, ErrorKind::BadGateway);
    }

    #[tokio::test]
    async fn test_search_passes_payload_through() {
        let svc = service(MockGateway::default().with_feed(feed_of(2)));

        let result = svc.search(&SearchQuery::default()).await.expect("search");
        assert_eq!(result.articles.len(), 2);
        assert!(result.threads.is_empty());
    }
}
