//! Report comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A threaded message attached to a villa report.
///
/// Comments are immutable once posted; there is no edit or delete
/// operation. The report owns its comments: deleting a report cascades
/// to them at the database layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportComment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The report this comment belongs to.
    pub report_id: Uuid,
    /// Who wrote it.
    pub author_id: Uuid,
    /// Message body.
    pub body: String,
    /// Whether the comment was authored through the staff interface.
    ///
    /// Derived from the author's role at posting time, never supplied
    /// by the caller. A comment whose author is not the report owner
    /// always carries this flag.
    pub is_staff_origin: bool,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
    /// Mirrors `created_at`; comments are never edited.
    pub updated_at: DateTime<Utc>,
}
