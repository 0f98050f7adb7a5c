//! Profile self-service handlers.

use axum::Json;
use axum::extract::State;

use villacare_entity::profile::{UpdateProfile, UserProfile};

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let profile = state.account_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let profile = state
        .account_service
        .update_profile(
            &auth,
            UpdateProfile {
                phone: req.phone,
                address: req.address,
                villa_address: req.villa_address,
                villa_type: req.villa_type,
                package_id: req.package_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(profile)))
}
