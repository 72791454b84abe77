//! In-memory [`ContentGateway`] for service tests.

use std::collections::HashMap;

use async_trait::async_trait;

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_entity::content::{Article, FeedPayload, Thread};
use newsdesk_gateway::{ContentGateway, FeedQuery, SearchQuery};

/// Gateway stub backed by hash maps. Unknown ids behave exactly like an
/// upstream failure: resolution misses, primary fetches error.
#[derive(Default)]
pub struct MockGateway {
    articles: HashMap<String, Article>,
    threads: HashMap<String, Thread>,
    feed: Option<FeedPayload>,
}

impl MockGateway {
    pub fn with_article(mut self, article: Article) -> Self {
        self.articles.insert(article.id.clone(), article);
        self
    }

    pub fn with_thread(mut self, thread: Thread) -> Self {
        self.threads.insert(thread.id.clone(), thread);
        self
    }

    pub fn with_feed(mut self, feed: FeedPayload) -> Self {
        self.feed = Some(feed);
        self
    }
}

#[async_trait]
impl ContentGateway for MockGateway {
    async fn resolve_article(&self, id: &str) -> Option<Article> {
        self.articles.get(id).cloned()
    }

    async fn resolve_thread(&self, id: &str) -> Option<Thread> {
        self.threads.get(id).cloned()
    }

    async fn fetch_article(&self, id: &str) -> AppResult<Article> {
        self.articles
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::bad_gateway("Could not fetch article"))
    }

    async fn fetch_thread(&self, id: &str) -> AppResult<Thread> {
        self.threads
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::bad_gateway("Could not fetch thread"))
    }

    async fn fetch_feed(&self, _query: &FeedQuery) -> AppResult<FeedPayload> {
        self.feed
            .clone()
            .ok_or_else(|| AppError::bad_gateway("Could not fetch feed"))
    }

    async fn search(&self, _query: &SearchQuery) -> AppResult<FeedPayload> {
        self.feed
            .clone()
            .ok_or_else(|| AppError::bad_gateway("Could not fetch search results"))
    }
}

/// Minimal article with only id, title, and publish timestamp set.
pub fn article(id: &str, published: Option<&str>) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {id}"),
        source: String::new(),
        author: None,
        published: published.map(str::to_string),
        description: None,
        image: None,
        topics: Vec::new(),
        language: None,
        views: None,
        comments_count: None,
        credibility_label: None,
    }
}

/// Minimal thread with member article ids and a last-updated timestamp.
pub fn thread(id: &str, members: &[&str], last_updated: Option<&str>) -> Thread {
    Thread {
        id: id.to_string(),
        title: format!("Thread {id}"),
        last_updated: last_updated.map(str::to_string),
        articles: members.iter().map(|m| m.to_string()).collect(),
        topic: None,
        image: None,
        language: None,
    }
}
