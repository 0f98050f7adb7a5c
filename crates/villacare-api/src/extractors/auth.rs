//! `AuthUser` extractor: resolves the bearer token to a session and
//! injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use villacare_core::error::AppError;
use villacare_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        // Resolve the opaque token to a live session
        let session = state
            .sessions
            .validate_token(token)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid or expired session"))?;

        // The session may outlive its user row
        let user = state
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        Ok(AuthUser(RequestContext::new(
            user.id,
            session.id,
            user.role,
            user.username,
        )))
    }
}
