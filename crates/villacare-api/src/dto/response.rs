//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use villacare_database::repositories::report::StatusCounts;
use villacare_entity::comment::ReportComment;
use villacare_entity::report::{ReportCategory, ReportPriority, ReportStatus, VillaReport};
use villacare_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Role.
    pub role: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role.to_string(),
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token. Shown exactly once.
    pub token: String,
    /// User info.
    pub user: UserResponse,
}

/// Report representation.
///
/// `staff_notes` is omitted entirely for non-staff readers, including
/// the report's owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Report ID.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// Category.
    pub category: ReportCategory,
    /// Priority.
    pub priority: ReportPriority,
    /// Badge color for the priority.
    pub priority_color: String,
    /// Status.
    pub status: ReportStatus,
    /// Badge color for the status.
    pub status_color: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Location in the villa.
    pub location: String,
    /// Staff-only notes; present only for staff readers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_notes: Option<String>,
    /// Filed at.
    pub created_at: DateTime<Utc>,
    /// Last mutated at.
    pub updated_at: DateTime<Utc>,
    /// Scheduled work time.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Completion time.
    pub completed_at: Option<DateTime<Utc>>,
}

impl ReportResponse {
    /// Builds a response, stripping staff notes unless the reader is
    /// staff.
    pub fn from_report(report: VillaReport, include_staff_notes: bool) -> Self {
        Self {
            id: report.id,
            owner_id: report.owner_id,
            category: report.category,
            priority: report.priority,
            priority_color: report.priority.badge_color().to_string(),
            status: report.status,
            status_color: report.status.badge_color().to_string(),
            title: report.title,
            description: report.description,
            location: report.location,
            staff_notes: if include_staff_notes {
                report.staff_notes
            } else {
                None
            },
            created_at: report.created_at,
            updated_at: report.updated_at,
            scheduled_at: report.scheduled_at,
            completed_at: report.completed_at,
        }
    }
}

/// Comment representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    /// Comment ID.
    pub id: Uuid,
    /// The report commented on.
    pub report_id: Uuid,
    /// Comment author.
    pub author_id: Uuid,
    /// Comment text.
    pub body: String,
    /// Whether the author held the staff role when posting.
    pub is_staff_origin: bool,
    /// Posted at.
    pub created_at: DateTime<Utc>,
}

impl From<ReportComment> for CommentResponse {
    fn from(comment: ReportComment) -> Self {
        Self {
            id: comment.id,
            report_id: comment.report_id,
            author_id: comment.author_id,
            body: comment.body,
            is_staff_origin: comment.is_staff_origin,
            created_at: comment.created_at,
        }
    }
}

/// A report with its full comment thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDetailResponse {
    /// The report.
    pub report: ReportResponse,
    /// Comments, newest first.
    pub comments: Vec<CommentResponse>,
}

/// Dashboard counts plus recent reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Total reports in scope.
    pub total: u64,
    /// Pending reports.
    pub pending: u64,
    /// In-progress reports.
    pub in_progress: u64,
    /// Completed reports.
    pub completed: u64,
    /// Most recent reports in scope.
    pub recent: Vec<ReportResponse>,
}

impl DashboardResponse {
    /// Builds a dashboard response from counts and recent reports.
    pub fn new(counts: StatusCounts, recent: Vec<ReportResponse>) -> Self {
        Self {
            total: counts.total,
            pending: counts.pending,
            in_progress: counts.in_progress,
            completed: counts.completed,
            recent,
        }
    }
}

/// Staff dashboard: global counts plus recent reports and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffDashboardResponse {
    /// Total reports.
    pub total: u64,
    /// Pending reports.
    pub pending: u64,
    /// In-progress reports.
    pub in_progress: u64,
    /// Completed reports.
    pub completed: u64,
    /// Most recent reports across all owners.
    pub recent_reports: Vec<ReportResponse>,
    /// Most recent comments across all reports.
    pub recent_comments: Vec<CommentResponse>,
}

impl StaffDashboardResponse {
    /// Builds a staff dashboard response.
    pub fn new(
        counts: StatusCounts,
        recent_reports: Vec<ReportResponse>,
        recent_comments: Vec<CommentResponse>,
    ) -> Self {
        Self {
            total: counts.total,
            pending: counts.pending,
            in_progress: counts.in_progress,
            completed: counts.completed,
            recent_reports,
            recent_comments,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Database reachability.
    pub database: String,
    /// Version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_report() -> VillaReport {
        let now = Utc::now();
        VillaReport {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            category: ReportCategory::Maintenance,
            priority: ReportPriority::High,
            status: ReportStatus::InProgress,
            title: "Leaking tap".to_string(),
            description: "Kitchen tap drips constantly".to_string(),
            location: "Kitchen".to_string(),
            staff_notes: Some("Parts ordered".to_string()),
            created_at: now,
            updated_at: now,
            scheduled_at: None,
            completed_at: None,
        }
    }

    #[test]
    fn test_staff_notes_stripped_for_residents() {
        let resp = ReportResponse::from_report(sample_report(), false);
        assert!(resp.staff_notes.is_none());

        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("staff_notes").is_none());
    }

    #[test]
    fn test_staff_notes_kept_for_staff() {
        let resp = ReportResponse::from_report(sample_report(), true);
        assert_eq!(resp.staff_notes.as_deref(), Some("Parts ordered"));
    }

    #[test]
    fn test_badge_colors_follow_fields() {
        let resp = ReportResponse::from_report(sample_report(), true);
        assert_eq!(resp.priority_color, "danger");
        assert_eq!(resp.status_color, "info");
    }

    #[test]
    fn test_staff_dashboard_carries_recent_comments() {
        let report = sample_report();
        let now = Utc::now();
        let comment = ReportComment {
            id: Uuid::new_v4(),
            report_id: report.id,
            author_id: report.owner_id,
            body: "Plumber booked for Tuesday".to_string(),
            is_staff_origin: true,
            created_at: now,
            updated_at: now,
        };

        let counts = StatusCounts {
            total: 3,
            pending: 1,
            in_progress: 1,
            completed: 1,
        };
        let resp = StaffDashboardResponse::new(
            counts,
            vec![ReportResponse::from_report(report, true)],
            vec![comment.into()],
        );

        assert_eq!(resp.total, 3);
        assert_eq!(resp.recent_comments.len(), 1);

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json["recent_comments"][0]["body"],
            "Plumber booked for Tuesday"
        );
        assert_eq!(json["recent_comments"][0]["is_staff_origin"], true);
    }
}
