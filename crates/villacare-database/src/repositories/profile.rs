//! User profile repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use villacare_core::error::{AppError, ErrorKind};
use villacare_core::result::AppResult;
use villacare_entity::profile::{UpdateProfile, UserProfile};

/// Repository for user profiles.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a user's profile, creating an empty one if it is missing.
    pub async fn get_or_create(&self, user_id: Uuid) -> AppResult<UserProfile> {
        sqlx::query_as::<_, UserProfile>(
            "INSERT INTO user_profiles (user_id) VALUES ($1) \
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id \
             RETURNING *",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get or create profile", e))
    }

    /// Update a user's profile fields, refreshing `updated_at`.
    pub async fn update(&self, user_id: Uuid, data: &UpdateProfile) -> AppResult<UserProfile> {
        sqlx::query_as::<_, UserProfile>(
            "UPDATE user_profiles SET \
                 phone = COALESCE($2, phone), \
                 address = COALESCE($3, address), \
                 villa_address = COALESCE($4, villa_address), \
                 villa_type = COALESCE($5, villa_type), \
                 package_id = COALESCE($6, package_id), \
                 updated_at = NOW() \
             WHERE user_id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.villa_address)
        .bind(&data.villa_type)
        .bind(data.package_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?
        .ok_or_else(|| AppError::not_found("Profile not found"))
    }
}
