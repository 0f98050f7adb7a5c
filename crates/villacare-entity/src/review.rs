//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A visitor-submitted review.
///
/// Reviews are stored unapproved and only published once staff approve
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique review identifier.
    pub id: Uuid,
    /// Reviewer's name.
    pub name: String,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Review text.
    pub comment: String,
    /// Whether staff have approved the review for publication.
    pub is_approved: bool,
    /// When the review was submitted.
    pub created_at: DateTime<Utc>,
}
