//! Session storage operations wrapping the database repository.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use villacare_core::config::SessionConfig;
use villacare_core::error::AppError;
use villacare_database::repositories::session::SessionRepository;
use villacare_entity::session::Session;

use super::token;

/// Abstracts session persistence operations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Session database repository.
    repo: Arc<SessionRepository>,
    /// Session configuration.
    config: SessionConfig,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(repo: Arc<SessionRepository>, config: SessionConfig) -> Self {
        Self { repo, config }
    }

    /// Opens a session for a user, returning the stored record and the
    /// plaintext bearer token. The token is shown exactly once; only
    /// its hash is persisted.
    ///
    /// Expired sessions are swept here, so the table never grows past
    /// the live ones without needing a background job.
    pub async fn open_session(&self, user_id: Uuid) -> Result<(Session, String), AppError> {
        self.purge_expired().await?;

        let plaintext = token::generate_token();
        let token_hash = token::hash_token(&plaintext);
        let expires_at = Utc::now() + Duration::hours(self.config.lifetime_hours as i64);

        let session = self.repo.create(user_id, &token_hash, expires_at).await?;
        Ok((session, plaintext))
    }

    /// Resolves a bearer token to its live session, touching activity.
    ///
    /// Returns `None` for unknown and expired tokens alike.
    pub async fn validate_token(&self, plaintext: &str) -> Result<Option<Session>, AppError> {
        let token_hash = token::hash_token(plaintext);
        self.repo.find_live_by_token_hash(&token_hash).await
    }

    /// Closes a session (logout). Closing an already-closed session is
    /// not an error.
    pub async fn close_session(&self, session_id: Uuid) -> Result<(), AppError> {
        let removed = self.repo.delete(session_id).await?;
        if !removed {
            tracing::debug!(%session_id, "session already closed");
        }
        Ok(())
    }

    /// Removes all expired sessions.
    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        let purged = self.repo.purge_expired().await?;
        if purged > 0 {
            tracing::info!(purged, "purged expired sessions");
        }
        Ok(purged)
    }
}
