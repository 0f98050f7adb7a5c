//! Public endpoints: packages, reviews, contact.

use axum::Json;
use axum::extract::State;

use villacare_entity::package::Package;
use villacare_entity::review::Review;
use villacare_service::intake::{SubmitContactRequest, SubmitReviewRequest};

use crate::dto::request::{self, ContactRequest, ReviewRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/packages
pub async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Package>>>, ApiError> {
    let packages = state.account_service.list_packages().await?;
    Ok(Json(ApiResponse::ok(packages)))
}

/// GET /api/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Review>>>, ApiError> {
    let reviews = state.intake_service.list_approved_reviews().await?;
    Ok(Json(ApiResponse::ok(reviews)))
}

/// POST /api/reviews
pub async fn submit_review(
    State(state): State<AppState>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    request::check(&req)?;

    state
        .intake_service
        .submit_review(SubmitReviewRequest {
            name: req.name,
            rating: req.rating,
            comment: req.comment,
        })
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Review submitted for approval",
    ))))
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    request::check(&req)?;

    state
        .intake_service
        .submit_contact(SubmitContactRequest {
            name: req.name,
            email: req.email,
            message: req.message,
        })
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Message received",
    ))))
}
