//! Response DTOs.

use serde::{Deserialize, Serialize};

use newsdesk_entity::content::{Article, ThreadView};
use newsdesk_entity::folder::model::Folder;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A folder together with its aggregated content view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderContentResponse {
    /// The folder record.
    pub folder: Folder,
    /// Standalone resolved articles.
    pub articles: Vec<Article>,
    /// Resolved threads with preview articles.
    pub threads: Vec<ThreadView>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}
