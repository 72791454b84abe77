//! `Caller` extractor — reads the identity header injected by the outer
//! auth layer.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use newsdesk_core::error::AppError;
use newsdesk_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extracted caller context available in handlers.
///
/// This core trusts the header; issuing and validating sessions is the
/// outer auth layer's job.
#[derive(Debug, Clone)]
pub struct Caller(pub RequestContext);

impl Caller {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for Caller {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::validation("Missing x-user-id header"))?;

        let user_id = raw
            .parse::<Uuid>()
            .map_err(|_| AppError::validation("Invalid x-user-id header"))?;

        Ok(Caller(RequestContext::new(user_id)))
    }
}
