//! Single-item content proxy handlers.

use axum::Json;
use axum::extract::{Path, State};


use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/articles/:id
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let article = state.feed_service.article(&id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": article })))
}

/// GET /api/threads/:id
pub async fn get_thread(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let thread = state.feed_service.thread(&id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": thread })))
}
