//! Report comment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use villacare_core::error::{AppError, ErrorKind};
use villacare_core::result::AppResult;
use villacare_entity::comment::ReportComment;

/// Repository for report comments.
///
/// Comments are append-only: there is no update or delete query. Rows
/// are removed only by the cascade when their report is deleted.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a comment to a report.
    ///
    /// A missing report surfaces as `NotFound` via the foreign key.
    pub async fn create(
        &self,
        report_id: Uuid,
        author_id: Uuid,
        body: &str,
        is_staff_origin: bool,
    ) -> AppResult<ReportComment> {
        sqlx::query_as::<_, ReportComment>(
            "INSERT INTO report_comments (report_id, author_id, body, is_staff_origin) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(report_id)
        .bind(author_id)
        .bind(body)
        .bind(is_staff_origin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("report_comments_report_id_fkey") =>
            {
                AppError::not_found("Report not found")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create comment", e),
        })
    }

    /// List a report's comments, newest first.
    pub async fn find_by_report(&self, report_id: Uuid) -> AppResult<Vec<ReportComment>> {
        sqlx::query_as::<_, ReportComment>(
            "SELECT * FROM report_comments WHERE report_id = $1 ORDER BY created_at DESC",
        )
        .bind(report_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// List the most recent comments across all reports.
    pub async fn find_recent(&self, limit: i64) -> AppResult<Vec<ReportComment>> {
        sqlx::query_as::<_, ReportComment>(
            "SELECT * FROM report_comments ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent comments", e)
        })
    }
}
