//! HTTP implementation of [`ContentGateway`] backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use newsdesk_core::config::news::NewsConfig;
use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_core::result::AppResult;
use newsdesk_entity::content::{Article, FeedPayload, Thread};

use crate::gateway::{ContentGateway, FeedQuery, SearchQuery};

/// Client for the external news content service.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NewsClient {
    /// Build a client from configuration.
    pub fn new(config: &NewsConfig) -> AppResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(AppError::configuration("news.base_url must be set"));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: trim_base_url(&config.base_url),
        })
    }

    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, reqwest::Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.http.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }
        request.send().await?.error_for_status()?.json::<T>().await
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.get_json::<T, ()>(path, None).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::BadGateway,
                format!("Upstream fetch failed for {path}"),
                e,
            )
        })
    }
}

#[async_trait]
impl ContentGateway for NewsClient {
    async fn resolve_article(&self, id: &str) -> Option<Article> {
        match self.get_json::<Article, ()>(&format!("/articles/{id}"), None).await {
            Ok(article) => Some(article),
            Err(e) => {
                debug!(article_id = %id, error = %e, "Article resolution miss");
                None
            }
        }
    }

    async fn resolve_thread(&self, id: &str) -> Option<Thread> {
        match self.get_json::<Thread, ()>(&format!("/threads/{id}"), None).await {
            Ok(thread) => Some(thread),
            Err(e) => {
                debug!(thread_id = %id, error = %e, "Thread resolution miss");
                None
            }
        }
    }

    async fn fetch_article(&self, id: &str) -> AppResult<Article> {
        self.fetch(&format!("/articles/{id}")).await
    }

    async fn fetch_thread(&self, id: &str) -> AppResult<Thread> {
        self.fetch(&format!("/threads/{id}")).await
    }

    async fn fetch_feed(&self, query: &FeedQuery) -> AppResult<FeedPayload> {
        self.get_json("/feed", Some(query)).await.map_err(|e| {
            AppError::with_source(ErrorKind::BadGateway, "Could not fetch feed", e)
        })
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<FeedPayload> {
        self.get_json("/search", Some(query)).await.map_err(|e| {
            AppError::with_source(ErrorKind::BadGateway, "Could not fetch search results", e)
        })
    }
}

/// Trim a trailing slash so path concatenation stays predictable.
fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_base_url() {
        assert_eq!(trim_base_url("http://news:8000/"), "http://news:8000");
        assert_eq!(trim_base_url("http://news:8000"), "http://news:8000");
    }

    #[test]
    fn test_new_rejects_empty_base_url() {
        let config = NewsConfig {
            base_url: "  ".to_string(),
            request_timeout_seconds: 5,
        };
        assert!(NewsClient::new(&config).is_err());
    }
}
