//! Villa report repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use villacare_core::error::{AppError, ErrorKind};
use villacare_core::result::AppResult;
use villacare_core::types::pagination::{PageRequest, PageResponse};
use villacare_entity::report::{CreateReport, ReportStatus, VillaReport};

/// Per-status report counts used by the dashboards.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCounts {
    /// Total reports in scope.
    pub total: u64,
    /// Reports currently pending.
    pub pending: u64,
    /// Reports currently in progress.
    pub in_progress: u64,
    /// Reports completed.
    pub completed: u64,
}

/// Repository for villa report CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// File a new report. Status is always written as `pending`.
    pub async fn create(&self, data: &CreateReport) -> AppResult<VillaReport> {
        sqlx::query_as::<_, VillaReport>(
            "INSERT INTO villa_reports (owner_id, category, priority, status, title, description, location) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(data.category)
        .bind(data.priority)
        .bind(ReportStatus::Pending)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("villa_reports_owner_id_fkey") =>
            {
                AppError::not_found("Report owner not found")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create report", e),
        })
    }

    /// Find a report by primary key, regardless of owner. Visibility is
    /// enforced by the service layer.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<VillaReport>> {
        sqlx::query_as::<_, VillaReport>("SELECT * FROM villa_reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find report", e))
    }

    /// List a user's reports, newest first.
    pub async fn find_by_owner(
        &self,
        owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<VillaReport>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM villa_reports WHERE owner_id = $1")
                .bind(owner_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count reports", e)
                })?;

        let reports = sqlx::query_as::<_, VillaReport>(
            "SELECT * FROM villa_reports WHERE owner_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(owner_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reports", e))?;

        Ok(PageResponse::new(
            reports,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all reports, newest first, optionally filtered by status.
    /// Staff paths only; role enforcement happens in the service.
    pub async fn find_all(
        &self,
        status: Option<ReportStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<VillaReport>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM villa_reports WHERE ($1::report_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count reports", e))?;

        let reports = sqlx::query_as::<_, VillaReport>(
            "SELECT * FROM villa_reports WHERE ($1::report_status IS NULL OR status = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reports", e))?;

        Ok(PageResponse::new(
            reports,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List a user's most recent reports without pagination metadata.
    pub async fn find_recent_by_owner(
        &self,
        owner_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<VillaReport>> {
        sqlx::query_as::<_, VillaReport>(
            "SELECT * FROM villa_reports WHERE owner_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(owner_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent reports", e)
        })
    }

    /// List the most recent reports across all users.
    pub async fn find_recent(&self, limit: i64) -> AppResult<Vec<VillaReport>> {
        sqlx::query_as::<_, VillaReport>(
            "SELECT * FROM villa_reports ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent reports", e)
        })
    }

    /// Persist a mutated report. Writes every mutable field.
    pub async fn update(&self, report: &VillaReport) -> AppResult<VillaReport> {
        sqlx::query_as::<_, VillaReport>(
            "UPDATE villa_reports SET \
                 category = $2, priority = $3, status = $4, title = $5, \
                 description = $6, location = $7, staff_notes = $8, \
                 scheduled_at = $9, completed_at = $10, updated_at = $11 \
             WHERE id = $1 RETURNING *",
        )
        .bind(report.id)
        .bind(report.category)
        .bind(report.priority)
        .bind(report.status)
        .bind(&report.title)
        .bind(&report.description)
        .bind(&report.location)
        .bind(&report.staff_notes)
        .bind(report.scheduled_at)
        .bind(report.completed_at)
        .bind(report.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update report", e))?
        .ok_or_else(|| AppError::not_found(format!("Report {} not found", report.id)))
    }

    /// Per-status counts, optionally scoped to one owner.
    pub async fn count_by_status(&self, owner_id: Option<Uuid>) -> AppResult<StatusCounts> {
        let row: (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
                    COUNT(*) FILTER (WHERE status = 'pending'), \
                    COUNT(*) FILTER (WHERE status = 'in_progress'), \
                    COUNT(*) FILTER (WHERE status = 'completed') \
             FROM villa_reports WHERE ($1::uuid IS NULL OR owner_id = $1)",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count reports by status", e)
        })?;

        Ok(StatusCounts {
            total: row.0 as u64,
            pending: row.1 as u64,
            in_progress: row.2 as u64,
            completed: row.3 as u64,
        })
    }
}
