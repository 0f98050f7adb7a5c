//! Villa report entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::category::ReportCategory;
use super::priority::ReportPriority;
use super::status::ReportStatus;

/// A user-filed service/issue record against a villa subscription.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VillaReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// The user the report belongs to. Immutable after creation.
    pub owner_id: Uuid,
    /// What kind of issue this is.
    pub category: ReportCategory,
    /// Assigned priority.
    pub priority: ReportPriority,
    /// Lifecycle status.
    pub status: ReportStatus,
    /// Brief title.
    pub title: String,
    /// Detailed description of the issue or request.
    pub description: String,
    /// Specific location in the villa.
    pub location: String,
    /// Internal notes, visible to staff only.
    pub staff_notes: Option<String>,
    /// When the report was filed. Immutable.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
    /// When work is scheduled, if any.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// When work was finished, if recorded.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Data required to file a new report.
///
/// There is deliberately no status field: every report is created
/// `pending` regardless of who files it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReport {
    /// The owning user.
    pub owner_id: Uuid,
    /// Report category.
    pub category: ReportCategory,
    /// Priority, defaulting to medium when unspecified.
    pub priority: ReportPriority,
    /// Brief title.
    pub title: String,
    /// Detailed description.
    pub description: String,
    /// Specific location in the villa.
    pub location: String,
}

/// Staff-applied edits to an existing report.
///
/// Every field is optional; `None` leaves the stored value untouched.
/// There is no transition constraint: staff may set any status from any
/// status, and re-applying the current status is a valid edit that still
/// refreshes `updated_at`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffReportPatch {
    /// New status.
    pub status: Option<ReportStatus>,
    /// New priority.
    pub priority: Option<ReportPriority>,
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New staff-only notes.
    pub staff_notes: Option<String>,
    /// New scheduled time.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// New completion time.
    pub completed_at: Option<DateTime<Utc>>,
}

impl VillaReport {
    /// Apply a staff edit in place, refreshing `updated_at`.
    ///
    /// Owner, category, and creation time are not patchable.
    pub fn apply_staff_patch(&mut self, patch: &StaffReportPatch, now: DateTime<Utc>) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(location) = &patch.location {
            self.location = location.clone();
        }
        if let Some(notes) = &patch.staff_notes {
            self.staff_notes = Some(notes.clone());
        }
        if let Some(scheduled_at) = patch.scheduled_at {
            self.scheduled_at = Some(scheduled_at);
        }
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = Some(completed_at);
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_report() -> VillaReport {
        let now = Utc::now();
        VillaReport {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            category: ReportCategory::Pool,
            priority: ReportPriority::Low,
            status: ReportStatus::Pending,
            title: "Pool Maintenance".to_string(),
            description: "Filter needs cleaning".to_string(),
            location: "Pool area".to_string(),
            staff_notes: None,
            created_at: now,
            updated_at: now,
            scheduled_at: None,
            completed_at: None,
        }
    }

    #[test]
    fn test_patch_updates_status_and_timestamp() {
        let mut report = sample_report();
        let later = report.updated_at + Duration::minutes(5);

        let patch = StaffReportPatch {
            status: Some(ReportStatus::InProgress),
            ..Default::default()
        };
        report.apply_staff_patch(&patch, later);

        assert_eq!(report.status, ReportStatus::InProgress);
        assert_eq!(report.updated_at, later);
        assert_eq!(report.priority, ReportPriority::Low);
    }

    #[test]
    fn test_patch_is_idempotent_on_status() {
        let mut report = sample_report();
        let patch = StaffReportPatch {
            status: Some(ReportStatus::Completed),
            ..Default::default()
        };

        let t1 = report.updated_at + Duration::minutes(1);
        report.apply_staff_patch(&patch, t1);
        assert_eq!(report.status, ReportStatus::Completed);
        assert_eq!(report.updated_at, t1);

        let t2 = t1 + Duration::minutes(1);
        report.apply_staff_patch(&patch, t2);
        assert_eq!(report.status, ReportStatus::Completed);
        assert_eq!(report.updated_at, t2);
    }

    #[test]
    fn test_patch_allows_backward_transition() {
        let mut report = sample_report();
        report.status = ReportStatus::Completed;

        let patch = StaffReportPatch {
            status: Some(ReportStatus::InProgress),
            ..Default::default()
        };
        report.apply_staff_patch(&patch, Utc::now());

        assert_eq!(report.status, ReportStatus::InProgress);
    }

    #[test]
    fn test_empty_patch_still_refreshes_updated_at() {
        let mut report = sample_report();
        let later = report.updated_at + Duration::minutes(10);

        report.apply_staff_patch(&StaffReportPatch::default(), later);

        assert_eq!(report.updated_at, later);
        assert_eq!(report.status, ReportStatus::Pending);
    }

    #[test]
    fn test_patch_does_not_touch_owner_or_created_at() {
        let mut report = sample_report();
        let owner = report.owner_id;
        let created = report.created_at;

        let patch = StaffReportPatch {
            status: Some(ReportStatus::Cancelled),
            staff_notes: Some("duplicate of earlier report".to_string()),
            ..Default::default()
        };
        report.apply_staff_patch(&patch, Utc::now());

        assert_eq!(report.owner_id, owner);
        assert_eq!(report.created_at, created);
        assert_eq!(
            report.staff_notes.as_deref(),
            Some("duplicate of earlier report")
        );
    }
}
