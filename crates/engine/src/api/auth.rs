//! Authentication for HTTP routes
//!
//! Extracts the caller's user id from the `X-User-Id` header. Handlers that
//! change game state take [`Auth`] and reject anonymous requests with 401.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

const USER_ID_HEADER: &str = "X-User-Id";

/// User ID extracted from request headers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Extractor for authenticated user in handlers
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(Auth(user): Auth) -> impl IntoResponse {
///     format!("User ID: {}", user.user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Auth(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Auth(AuthenticatedUser { user_id }))
    }
}
