//! Resident-facing report handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use villacare_core::types::pagination::PageResponse;
use villacare_service::report as svc;

use crate::dto::request::{self, CommentRequest, FileReportRequest};
use crate::dto::response::{
    ApiResponse, CommentResponse, DashboardResponse, ReportDetailResponse, ReportResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/dashboard
pub async fn my_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardResponse>>, ApiError> {
    let dashboard = state.report_service.my_dashboard(&auth).await?;

    let staff = auth.is_staff();
    let recent = dashboard
        .recent
        .into_iter()
        .map(|r| ReportResponse::from_report(r, staff))
        .collect();

    Ok(Json(ApiResponse::ok(DashboardResponse::new(
        dashboard.counts,
        recent,
    ))))
}

/// GET /api/reports
pub async fn list_my_reports(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ReportResponse>>>, ApiError> {
    let page = state
        .report_service
        .list_my_reports(&auth, params.into_page_request())
        .await?;

    let staff = auth.is_staff();
    let page = page.map(|r| ReportResponse::from_report(r, staff));
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/reports
///
/// Residents always file for themselves; any `on_behalf_of` in the
/// body is ignored here. Staff use the admin route.
pub async fn file_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<FileReportRequest>,
) -> Result<Json<ApiResponse<ReportResponse>>, ApiError> {
    request::check(&req)?;

    let report = state
        .report_service
        .file_report(
            &auth,
            svc::FileReportRequest {
                category: req.category,
                priority: req.priority,
                title: req.title,
                description: req.description,
                location: req.location,
                on_behalf_of: None,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ReportResponse::from_report(
        report,
        auth.is_staff(),
    ))))
}

/// GET /api/reports/:id
pub async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReportDetailResponse>>, ApiError> {
    let report = state.report_service.get_report(&auth, id).await?;
    let comments = state.report_service.list_comments(&auth, id).await?;

    Ok(Json(ApiResponse::ok(ReportDetailResponse {
        report: ReportResponse::from_report(report, auth.is_staff()),
        comments: comments.into_iter().map(CommentResponse::from).collect(),
    })))
}

/// POST /api/reports/:id/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ApiResponse<CommentResponse>>, ApiError> {
    request::check(&req)?;

    let comment = state.report_service.add_comment(&auth, id, &req.body).await?;
    Ok(Json(ApiResponse::ok(comment.into())))
}
