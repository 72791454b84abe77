//! # newsdesk-api
//!
//! HTTP API layer for Newsdesk built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, logging), extractors,
//! DTOs, and error mapping. Caller identity comes from the `x-user-id`
//! header; session issuance lives outside this core.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
