//! Discovery feed handler.

use axum::Json;
use axum::extract::{Query, State};

use newsdesk_gateway::FeedQuery;

use crate::dto::request::FeedParams;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/feed
///
/// Filters and sort forward upstream; `page` selects a page of the merged
/// list (fixed page size) after aggregation.
pub async fn discover(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut query = FeedQuery::default();
    if let Some(feed_type) = params.feed_type {
        query.feed_type = feed_type;
    }
    if let Some(sort) = params.sort {
        query.sort = sort;
    }
    if let Some(size) = params.size {
        query.size = size;
    }
    query.topics = params.topics;
    query.languages = params.languages;

    let page = state
        .feed_service
        .discover(&query, params.page.unwrap_or(1))
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}
