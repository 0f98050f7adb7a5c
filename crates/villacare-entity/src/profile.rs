//! User profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Villa subscription profile, one per user.
///
/// Created empty at registration and filled in by the user afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Home address.
    pub address: Option<String>,
    /// Address of the subscribed villa.
    pub villa_address: Option<String>,
    /// Villa type (e.g. Modern, Traditional, Beachfront).
    pub villa_type: Option<String>,
    /// Chosen subscription package, if any.
    pub package_id: Option<Uuid>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields a user may change on their own profile.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New phone number.
    pub phone: Option<String>,
    /// New home address.
    pub address: Option<String>,
    /// New villa address.
    pub villa_address: Option<String>,
    /// New villa type.
    pub villa_type: Option<String>,
    /// New subscription package.
    pub package_id: Option<Uuid>,
}
