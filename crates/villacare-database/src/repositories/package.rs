//! Subscription package repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use villacare_core::error::{AppError, ErrorKind};
use villacare_core::result::AppResult;
use villacare_entity::package::Package;

/// Repository for subscription packages.
#[derive(Debug, Clone)]
pub struct PackageRepository {
    pool: PgPool,
}

impl PackageRepository {
    /// Create a new package repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a package by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Package>> {
        sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find package", e))
    }

    /// List all packages, ordered by billing cadence and price.
    pub async fn find_all(&self) -> AppResult<Vec<Package>> {
        sqlx::query_as::<_, Package>(
            "SELECT * FROM packages ORDER BY package_type ASC, price_cents ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list packages", e))
    }
}
