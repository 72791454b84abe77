//! Search passthrough handler.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use newsdesk_core::error::AppError;
use newsdesk_gateway::SearchQuery;

use crate::dto::request::SearchParams;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/search
///
/// Forwards the query upstream verbatim; the payload passes through
/// unmerged.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let mut query = SearchQuery {
        q: params.q,
        ..SearchQuery::default()
    };
    if let Some(view) = params.view {
        query.view = view;
    }
    if let Some(sort) = params.sort {
        query.sort = sort;
    }
    if let Some(page) = params.page {
        query.page = page;
    }
    if let Some(size) = params.size {
        query.size = size;
    }
    query.topics = params.topics;

    let payload = state.feed_service.search(&query).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": payload })))
}
