//! Staff-only handlers.
//!
//! Role enforcement lives in the services; these handlers only shape
//! requests and responses.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use villacare_core::types::pagination::{PageRequest, PageResponse};
use villacare_entity::contact::Contact;
use villacare_entity::report::{ReportStatus, StaffReportPatch};
use villacare_entity::review::Review;
use villacare_service::report as svc;

use crate::dto::request::{self, EditReportRequest, FileReportRequest};
use crate::dto::response::{ApiResponse, CommentResponse, ReportResponse, StaffDashboardResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Query parameters for the admin report list.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportListParams {
    /// Optional status filter.
    pub status: Option<ReportStatus>,
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

/// GET /api/admin/dashboard
pub async fn staff_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<StaffDashboardResponse>>, ApiError> {
    let dashboard = state.report_service.staff_dashboard(&auth).await?;

    let recent_reports = dashboard
        .recent_reports
        .into_iter()
        .map(|r| ReportResponse::from_report(r, true))
        .collect();
    let recent_comments = dashboard
        .recent_comments
        .into_iter()
        .map(CommentResponse::from)
        .collect();

    Ok(Json(ApiResponse::ok(StaffDashboardResponse::new(
        dashboard.counts,
        recent_reports,
        recent_comments,
    ))))
}

/// GET /api/admin/reports?status=...
pub async fn list_reports(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ReportListParams>,
) -> Result<Json<ApiResponse<PageResponse<ReportResponse>>>, ApiError> {
    let page = state
        .report_service
        .list_all_reports(
            &auth,
            params.status,
            PageRequest::new(params.page, params.per_page),
        )
        .await?;

    let page = page.map(|r| ReportResponse::from_report(r, true));
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/admin/reports
///
/// Files a report on behalf of a resident.
pub async fn file_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<FileReportRequest>,
) -> Result<Json<ApiResponse<ReportResponse>>, ApiError> {
    request::check(&req)?;

    let report = state
        .report_service
        .staff_file_report(
            &auth,
            svc::FileReportRequest {
                category: req.category,
                priority: req.priority,
                title: req.title,
                description: req.description,
                location: req.location,
                on_behalf_of: req.on_behalf_of,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ReportResponse::from_report(
        report, true,
    ))))
}

/// PUT /api/admin/reports/:id
pub async fn edit_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<EditReportRequest>,
) -> Result<Json<ApiResponse<ReportResponse>>, ApiError> {
    let patch = StaffReportPatch {
        status: req.status,
        priority: req.priority,
        title: req.title,
        description: req.description,
        location: req.location,
        staff_notes: req.staff_notes,
        scheduled_at: req.scheduled_at,
        completed_at: req.completed_at,
    };

    let report = state.report_service.staff_edit(&auth, id, patch).await?;
    Ok(Json(ApiResponse::ok(ReportResponse::from_report(
        report, true,
    ))))
}

/// GET /api/admin/contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Contact>>>, ApiError> {
    let page = state
        .intake_service
        .list_contacts(&auth, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/admin/reviews
pub async fn list_pending_reviews(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Review>>>, ApiError> {
    let page = state
        .intake_service
        .list_pending_reviews(&auth, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/admin/reviews/:id/approve
pub async fn approve_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Review>>, ApiError> {
    let review = state.intake_service.approve_review(&auth, id).await?;
    Ok(Json(ApiResponse::ok(review)))
}
