//! Request DTOs.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Body for `POST /api/bookmarks`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFolderBody {
    /// Folder display name.
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    /// Optional display color.
    pub color: Option<String>,
    /// Initial star flag.
    #[serde(default)]
    pub starred: bool,
    /// Parent folder for nesting.
    pub parent_id: Option<Uuid>,
}

/// Query parameters for `GET /api/feed`.
///
/// Filters and sort are forwarded upstream; `page` selects a page of the
/// merged list after aggregation.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedParams {
    pub feed_type: Option<String>,
    pub topics: Option<String>,
    pub languages: Option<String>,
    pub sort: Option<String>,
    /// Upstream page size.
    pub size: Option<u64>,
    /// Merged-list page (1-based).
    pub page: Option<u64>,
}

/// Query parameters for `GET /api/search`, forwarded upstream verbatim.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(min = 1, message = "q must not be empty"))]
    pub q: String,
    pub view: Option<String>,
    pub sort: Option<String>,
    pub topics: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_folder_rejects_empty_name() {
        let body = CreateFolderBody {
            name: String::new(),
            color: None,
            starred: false,
            parent_id: None,
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_search_params_require_query() {
        let params: SearchParams = serde_json::from_str(r#"{"q": ""}"#).expect("deserialize");
        assert!(params.validate().is_err());
    }
}
