//! Bookmark folder handlers: CRUD, membership, tree, and content views.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use newsdesk_core::error::AppError;
use newsdesk_service::folder::service::CreateFolderRequest as SvcCreateFolder;

use crate::dto::request::CreateFolderBody;
use crate::dto::response::{ApiResponse, FolderContentResponse};
use crate::extractors::Caller;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/bookmarks
pub async fn create_folder(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<CreateFolderBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create_folder(
            &caller,
            SvcCreateFolder {
                name: body.name,
                color: body.color,
                starred: body.starred,
                parent_id: body.parent_id,
            },
        )
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// GET /api/bookmarks
pub async fn get_tree(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<serde_json::Value>, ApiError> {
    let forest = state.tree_service.tree(&caller).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": forest })))
}

/// GET /api/bookmarks/save-for-later
pub async fn save_for_later(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<FolderContentResponse>>, ApiError> {
    let folder = state.folder_service.save_for_later(&caller).await?;
    let content = state.aggregation_service.folder_content(&folder).await;

    Ok(Json(ApiResponse::ok(FolderContentResponse {
        folder,
        articles: content.articles,
        threads: content.threads,
    })))
}

/// GET /api/bookmarks/:folder_id
pub async fn get_folder_content(
    State(state): State<AppState>,
    caller: Caller,
    Path(folder_id): Path<Uuid>,
) -> Result<Json<ApiResponse<FolderContentResponse>>, ApiError> {
    let folder = state.folder_service.get_folder(&caller, folder_id).await?;
    let content = state.aggregation_service.folder_content(&folder).await;

    Ok(Json(ApiResponse::ok(FolderContentResponse {
        folder,
        articles: content.articles,
        threads: content.threads,
    })))
}

/// DELETE /api/bookmarks/:folder_id
pub async fn delete_folder(
    State(state): State<AppState>,
    caller: Caller,
    Path(folder_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.folder_service.remove_folder(&caller, folder_id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Folder deleted" } }),
    ))
}

/// POST /api/bookmarks/:folder_id/articles/:article_id
pub async fn add_article(
    State(state): State<AppState>,
    caller: Caller,
    Path((folder_id, article_id)): Path<(Uuid, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state
        .folder_service
        .add_article(&caller, folder_id, &article_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// DELETE /api/bookmarks/:folder_id/articles/:article_id
pub async fn remove_article(
    State(state): State<AppState>,
    caller: Caller,
    Path((folder_id, article_id)): Path<(Uuid, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state
        .folder_service
        .remove_article(&caller, folder_id, &article_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// PATCH /api/bookmarks/:folder_id/threads/:thread_id
pub async fn add_thread(
    State(state): State<AppState>,
    caller: Caller,
    Path((folder_id, thread_id)): Path<(Uuid, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state
        .folder_service
        .add_thread(&caller, folder_id, &thread_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// DELETE /api/bookmarks/:folder_id/threads/:thread_id
pub async fn remove_thread(
    State(state): State<AppState>,
    caller: Caller,
    Path((folder_id, thread_id)): Path<(Uuid, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state
        .folder_service
        .remove_thread(&caller, folder_id, &thread_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// PATCH /api/bookmarks/:folder_id/toggle-star
pub async fn toggle_star(
    State(state): State<AppState>,
    caller: Caller,
    Path(folder_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state.folder_service.toggle_star(&caller, folder_id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}
