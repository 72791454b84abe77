//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use newsdesk_core::config::AppConfig;
use newsdesk_service::content::AggregationService;
use newsdesk_service::feed::FeedService;
use newsdesk_service::folder::{FolderService, TreeService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// Folder tree service
    pub tree_service: Arc<TreeService>,
    /// Content aggregation service
    pub aggregation_service: Arc<AggregationService>,
    /// Discovery feed and search service
    pub feed_service: Arc<FeedService>,
}
