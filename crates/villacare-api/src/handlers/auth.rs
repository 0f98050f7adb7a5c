//! Registration, login, logout, and current-user handlers.

use axum::Json;
use axum::extract::State;

use villacare_service::account;

use crate::dto::request::{self, LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    request::check(&req)?;

    let user = state
        .account_service
        .register(account::RegisterRequest {
            username: req.username,
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
        })
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    request::check(&req)?;

    let outcome = state
        .account_service
        .login(account::LoginRequest {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: outcome.token,
        user: outcome.user.into(),
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.account_service.logout(&auth).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Logged out"))))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.account_service.current_user(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
