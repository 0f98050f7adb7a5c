//! Contact message repository implementation.

use sqlx::PgPool;

use villacare_core::error::{AppError, ErrorKind};
use villacare_core::result::AppResult;
use villacare_core::types::pagination::{PageRequest, PageResponse};
use villacare_entity::contact::Contact;

/// Repository for contact messages.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Create a new contact repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a submitted contact message.
    pub async fn create(&self, name: &str, email: &str, message: &str) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (name, email, message) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(name)
        .bind(email)
        .bind(message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create contact", e))
    }

    /// List contact messages, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Contact>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count contacts", e)
            })?;

        let contacts = sqlx::query_as::<_, Contact>(
            "SELECT * FROM contacts ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list contacts", e))?;

        Ok(PageResponse::new(
            contacts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
