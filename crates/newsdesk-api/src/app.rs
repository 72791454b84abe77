//! Application builder — wires repositories, services, and router into a
//! running server.

use std::sync::Arc;

use sqlx::PgPool;

use newsdesk_core::config::AppConfig;
use newsdesk_core::error::AppError;
use newsdesk_database::repositories::FolderRepository;
use newsdesk_gateway::client::NewsClient;
use newsdesk_gateway::ContentGateway;
use newsdesk_service::content::AggregationService;
use newsdesk_service::feed::FeedService;
use newsdesk_service::folder::{FolderService, TreeService};

use crate::router::build_router;
use crate::state::AppState;

/// Runs the Newsdesk server with the given configuration and database
/// pool. Blocks until shutdown.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting Newsdesk server...");

    // Repositories
    let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));

    // Upstream gateway
    let gateway: Arc<dyn ContentGateway> = Arc::new(NewsClient::new(&config.news)?);
    tracing::info!(base_url = %config.news.base_url, "News gateway initialized");

    // Services
    let folder_service = Arc::new(FolderService::new(Arc::clone(&folder_repo)));
    let tree_service = Arc::new(TreeService::new(Arc::clone(&folder_repo)));
    let aggregation_service = Arc::new(AggregationService::new(Arc::clone(&gateway)));
    let feed_service = Arc::new(FeedService::new(
        Arc::clone(&gateway),
        Arc::clone(&aggregation_service),
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        folder_service,
        tree_service,
        aggregation_service,
        feed_service,
    };

    let app = build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Newsdesk server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
