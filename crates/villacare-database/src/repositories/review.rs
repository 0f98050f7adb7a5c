//! Review repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use villacare_core::error::{AppError, ErrorKind};
use villacare_core::result::AppResult;
use villacare_core::types::pagination::{PageRequest, PageResponse};
use villacare_entity::review::Review;

/// Repository for visitor reviews.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a submitted review. Always written unapproved.
    pub async fn create(&self, name: &str, rating: i32, comment: &str) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (name, rating, comment, is_approved) \
             VALUES ($1, $2, $3, FALSE) RETURNING *",
        )
        .bind(name)
        .bind(rating)
        .bind(comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create review", e))
    }

    /// List approved reviews, newest first, capped at `limit`.
    pub async fn find_approved(&self, limit: i64) -> AppResult<Vec<Review>> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE is_approved = TRUE \
             ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list approved reviews", e)
        })
    }

    /// List unapproved reviews awaiting moderation, newest first.
    pub async fn find_pending(&self, page: &PageRequest) -> AppResult<PageResponse<Review>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE is_approved = FALSE")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count pending reviews", e)
                })?;

        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE is_approved = FALSE \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list pending reviews", e)
        })?;

        Ok(PageResponse::new(
            reviews,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Mark a review as approved.
    pub async fn approve(&self, id: Uuid) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET is_approved = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to approve review", e))?
        .ok_or_else(|| AppError::not_found(format!("Review {id} not found")))
    }
}
