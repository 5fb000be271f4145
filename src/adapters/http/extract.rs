//! Request extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::foundation::UserId;

use super::error::ApiError;

/// Header carrying the identifier of the signed-in user.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated user context extracted from request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| UserId::new(s.trim()).ok())
            .ok_or_else(|| ApiError::Unauthorized("Authentication is required".to_string()))?;

        Ok(AuthenticatedUser { user_id })
    }
}
