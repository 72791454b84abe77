//! Upstream news content service configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external news content service consumed read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Base URL of the news service (e.g., `http://news-service:8000`).
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_request_timeout() -> u64 {
    10
}
