//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use villacare_auth::policy::Actor;
use villacare_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that
/// every operation knows *who* is acting and from *which* session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The user's role.
    pub role: UserRole,
    /// The username (convenience field resolved from the session).
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, session_id: Uuid, role: UserRole, username: String) -> Self {
        Self {
            user_id,
            session_id,
            role,
            username,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user holds the staff role.
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    /// The policy actor for this request.
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }
}
