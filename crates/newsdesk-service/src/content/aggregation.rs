//! Aggregation engine: joins stored folder references and upstream feed
//! payloads against the news content service.
//!
//! All enrichment goes through the gateway's `resolve_*` contract: a miss
//! drops that one item and the batch carries on. Misses are counted and
//! logged once per call so degraded upstream batches stay visible.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use newsdesk_entity::content::{Article, FeedItem, FeedPayload, FolderContent, Thread, ThreadView};
use newsdesk_entity::folder::model::Folder;
use newsdesk_gateway::ContentGateway;

/// How many member articles a folder thread view resolves for preview.
pub const THREAD_PREVIEW_LEN: usize = 3;

/// Service resolving stored content references against the upstream
/// news service.
pub struct AggregationService {
    gateway: Arc<dyn ContentGateway>,
}

impl AggregationService {
    /// Creates a new aggregation service.
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self { gateway }
    }

    /// Resolve a folder's saved references into displayable content.
    ///
    /// Threads resolve first; any article id carried by a resolved
    /// thread is then excluded from the standalone list, even when it
    /// was also saved directly. Each thread view carries a short preview
    /// of its first resolvable members.
    pub async fn folder_content(&self, folder: &Folder) -> FolderContent {
        let resolved_threads: Vec<Thread> = join_all(
            folder
                .thread_ids
                .iter()
                .map(|id| self.gateway.resolve_thread(id)),
        )
        .await
        .into_iter()
        .flatten()
        .collect();
        let thread_misses = folder.thread_ids.len() - resolved_threads.len();

        // Union of directly-saved ids and thread member ids, folder-first.
        let mut wanted: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for id in &folder.article_ids {
            if seen.insert(id) {
                wanted.push(id);
            }
        }
        for thread in &resolved_threads {
            for id in &thread.articles {
                if seen.insert(id) {
                    wanted.push(id);
                }
            }
        }

        let resolved: Vec<Article> =
            join_all(wanted.iter().map(|id| self.gateway.resolve_article(id)))
                .await
                .into_iter()
                .flatten()
                .collect();
        let article_misses = wanted.len() - resolved.len();

        if thread_misses > 0 || article_misses > 0 {
            warn!(
                folder_id = %folder.id,
                thread_misses,
                article_misses,
                "Folder content degraded by unresolved references"
            );
        }

        let by_id: HashMap<&str, &Article> =
            resolved.iter().map(|a| (a.id.as_str(), a)).collect();
        let thread_member_ids: HashSet<&str> = resolved_threads
            .iter()
            .flat_map(|t| t.articles.iter().map(String::as_str))
            .collect();

        let articles = resolved
            .iter()
            .filter(|a| !thread_member_ids.contains(a.id.as_str()))
            .cloned()
            .collect();

        let threads = resolved_threads
            .into_iter()
            .map(|thread| {
                let preview = thread
                    .articles
                    .iter()
                    .take(THREAD_PREVIEW_LEN)
                    .filter_map(|id| by_id.get(id.as_str()))
                    .map(|a| (*a).clone())
                    .collect();
                ThreadView::new(thread, preview)
            })
            .collect();

        FolderContent { articles, threads }
    }

    /// Merge an upstream feed page into a single deterministically
    /// ordered item list.
    ///
    /// Thread member ids missing from the payload's article list are
    /// resolved individually; articles attached to a thread are removed
    /// from the standalone set; the combined list sorts newest first by
    /// raw timestamp.
    pub async fn merge_feed(&self, payload: FeedPayload) -> Vec<FeedItem> {
        let mut articles_by_id: HashMap<String, Article> = payload
            .articles
            .iter()
            .map(|a| (a.id.clone(), a.clone()))
            .collect();

        // First-seen order keeps the fan-out deterministic.
        let mut missing: Vec<&str> = Vec::new();
        for thread in &payload.threads {
            for id in &thread.articles {
                if !articles_by_id.contains_key(id) && !missing.contains(&id.as_str()) {
                    missing.push(id);
                }
            }
        }

        let requested = missing.len();
        let resolved: Vec<Article> =
            join_all(missing.iter().map(|id| self.gateway.resolve_article(id)))
                .await
                .into_iter()
                .flatten()
                .collect();
        if resolved.len() < requested {
            warn!(
                requested,
                resolved = resolved.len(),
                "Feed merge could not resolve all thread members"
            );
        }
        for article in resolved {
            articles_by_id.insert(article.id.clone(), article);
        }

        let mut thread_member_ids: HashSet<&str> = HashSet::new();
        let threads: Vec<ThreadView> = payload
            .threads
            .iter()
            .map(|thread| {
                let members = thread
                    .articles
                    .iter()
                    .filter_map(|id| {
                        articles_by_id.get(id).map(|a| {
                            thread_member_ids.insert(id.as_str());
                            a.clone()
                        })
                    })
                    .collect();
                ThreadView::new(thread.clone(), members)
            })
            .collect();

        // Standalone articles keep payload order ahead of the sort so
        // equal timestamps stay deterministic.
        let mut items: Vec<FeedItem> = payload
            .articles
            .iter()
            .filter(|a| !thread_member_ids.contains(a.id.as_str()))
            .map(|a| FeedItem::Article(a.clone()))
            .collect();
        items.extend(threads.into_iter().map(FeedItem::Thread));

        items.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockGateway, article, thread};
    use chrono::Utc;
    use uuid::Uuid;

    fn folder(article_ids: &[&str], thread_ids: &[&str]) -> Folder {
        Folder {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "saved".to_string(),
            color: None,
            starred: false,
            parent_id: None,
            article_ids: article_ids.iter().map(|s| s.to_string()).collect(),
            thread_ids: thread_ids.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(gateway: MockGateway) -> AggregationService {
        AggregationService::new(Arc::new(gateway))
    }

    #[tokio::test]
    async fn test_thread_member_excluded_from_standalone() {
        // a2 is saved directly AND carried by t1; it must only appear
        // inside the thread view.
        let svc = service(
            MockGateway::default()
                .with_article(article("a1", None))
                .with_article(article("a2", None))
                .with_article(article("a3", None))
                .with_thread(thread("t1", &["a2", "a3"], None)),
        );

        let content = svc.folder_content(&folder(&["a1", "a2"], &["t1"])).await;

        let standalone: Vec<&str> = content.articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(standalone, vec!["a1"]);
        assert_eq!(content.threads.len(), 1);
        let preview: Vec<&str> = content.threads[0]
            .articles
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(preview, vec!["a2", "a3"]);
    }

    #[tokio::test]
    async fn test_unresolvable_reference_is_dropped() {
        let svc = service(
            MockGateway::default()
                .with_article(article("a1", None))
                .with_article(article("a3", None)),
        );

        let content = svc
            .folder_content(&folder(&["a1", "gone", "a3"], &["missing-thread"]))
            .await;

        let ids: Vec<&str> = content.articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a3"]);
        assert!(content.threads.is_empty());
    }

    #[tokio::test]
    async fn test_thread_preview_is_bounded() {
        let mut gateway = MockGateway::default()
            .with_thread(thread("t1", &["a1", "a2", "a3", "a4", "a5"], None));
        for id in ["a1", "a2", "a3", "a4", "a5"] {
            gateway = gateway.with_article(article(id, None));
        }

        let content = service(gateway).folder_content(&folder(&[], &["t1"])).await;
        assert_eq!(content.threads[0].articles.len(), THREAD_PREVIEW_LEN);
    }

    #[tokio::test]
    async fn test_empty_folder_resolves_to_empty_content() {
        let content = service(MockGateway::default())
            .folder_content(&folder(&[], &[]))
            .await;
        assert!(content.articles.is_empty());
        assert!(content.threads.is_empty());
    }

    #[tokio::test]
    async fn test_merge_sorts_newest_first() {
        let payload = FeedPayload {
            articles: vec![
                article("a1", Some("2024-01-01T00:00:00Z")),
                article("a2", Some("2024-03-01T00:00:00Z")),
            ],
            threads: vec![thread("t1", &[], Some("2024-02-01T00:00:00Z"))],
        };

        let items = service(MockGateway::default()).merge_feed(payload).await;
        let ids: Vec<&str> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["a2", "t1", "a1"]);
    }

    #[tokio::test]
    async fn test_merge_resolves_missing_thread_members() {
        // a2 is referenced by t1 but absent from the payload page.
        let payload = FeedPayload {
            articles: vec![article("a1", Some("2024-01-01T00:00:00Z"))],
            threads: vec![thread("t1", &["a1", "a2"], Some("2024-02-01T00:00:00Z"))],
        };

        let items = service(MockGateway::default().with_article(article("a2", None)))
            .merge_feed(payload)
            .await;

        // a1 is thread-carried, so the only top-level items are the thread.
        assert_eq!(items.len(), 1);
        match &items[0] {
            FeedItem::Thread(view) => {
                let members: Vec<&str> = view.articles.iter().map(|a| a.id.as_str()).collect();
                assert_eq!(members, vec!["a1", "a2"]);
            }
            other => panic!("expected thread item, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_merge_drops_unresolvable_members_without_failing() {
        let payload = FeedPayload {
            articles: vec![article("a1", Some("2024-01-01T00:00:00Z"))],
            threads: vec![thread("t1", &["gone"], Some("2024-02-01T00:00:00Z"))],
        };

        let items = service(MockGateway::default()).merge_feed(payload).await;
        let ids: Vec<&str> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["t1", "a1"]);
        match &items[0] {
            FeedItem::Thread(view) => assert!(view.articles.is_empty()),
            other => panic!("expected thread item, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_merge_missing_timestamp_sorts_last() {
        let payload = FeedPayload {
            articles: vec![
                article("undated", None),
                article("dated", Some("2024-01-01T00:00:00Z")),
            ],
            threads: Vec::new(),
        };

        let items = service(MockGateway::default()).merge_feed(payload).await;
        let ids: Vec<&str> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["dated", "undated"]);
    }
}
