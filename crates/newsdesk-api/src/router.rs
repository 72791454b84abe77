//! Route definitions for the Newsdesk HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(bookmark_routes())
        .merge(content_routes())
        .merge(feed_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Bookmark folder CRUD, membership, tree, and content views.
fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", post(handlers::bookmarks::create_folder))
        .route("/bookmarks", get(handlers::bookmarks::get_tree))
        .route(
            "/bookmarks/save-for-later",
            get(handlers::bookmarks::save_for_later),
        )
        .route(
            "/bookmarks/{folder_id}",
            get(handlers::bookmarks::get_folder_content),
        )
        .route(
            "/bookmarks/{folder_id}",
            delete(handlers::bookmarks::delete_folder),
        )
        .route(
            "/bookmarks/{folder_id}/articles/{article_id}",
            post(handlers::bookmarks::add_article),
        )
        .route(
            "/bookmarks/{folder_id}/articles/{article_id}",
            delete(handlers::bookmarks::remove_article),
        )
        .route(
            "/bookmarks/{folder_id}/threads/{thread_id}",
            patch(handlers::bookmarks::add_thread),
        )
        .route(
            "/bookmarks/{folder_id}/threads/{thread_id}",
            delete(handlers::bookmarks::remove_thread),
        )
        .route(
            "/bookmarks/{folder_id}/toggle-star",
            patch(handlers::bookmarks::toggle_star),
        )
}

/// Single-item proxies against the upstream content service.
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/articles/{id}", get(handlers::content::get_article))
        .route("/threads/{id}", get(handlers::content::get_thread))
}

/// Discovery feed and search passthrough.
fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/feed", get(handlers::feed::discover))
        .route("/search", get(handlers::search::search))
}

/// Health check endpoints (no identity required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
