//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use villacare_core::error::AppError;
use villacare_entity::report::{ReportCategory, ReportPriority, ReportStatus};

/// Runs derive-based validation, mapping failures to a field-keyed
/// validation error.
pub fn check(req: &impl Validate) -> Result<(), AppError> {
    req.validate().map_err(|errs| {
        let fields = serde_json::to_value(errs.field_errors()).unwrap_or_default();
        AppError::validation_fields("Validation failed", fields)
    })
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// File report request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FileReportRequest {
    /// Report category.
    pub category: ReportCategory,
    /// Priority; defaults to medium when omitted.
    pub priority: Option<ReportPriority>,
    /// Brief title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Detailed description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Specific location in the villa.
    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,
    /// Resident to file for. Staff only; ignored on the resident route.
    pub on_behalf_of: Option<Uuid>,
}

/// Staff report edit request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditReportRequest {
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
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    /// New completion time.
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Comment request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    /// Comment body.
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub body: String,
}

/// Contact submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    /// Sender name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Sender email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Message body.
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Review submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewRequest {
    /// Reviewer name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Star rating, 1 through 5.
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    /// Review text.
    #[serde(default)]
    pub comment: String,
}

/// Update profile request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Phone number.
    pub phone: Option<String>,
    /// Mailing address.
    pub address: Option<String>,
    /// Villa address.
    pub villa_address: Option<String>,
    /// Villa type.
    pub villa_type: Option<String>,
    /// Chosen package.
    pub package_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use villacare_core::error::ErrorKind;

    #[test]
    fn test_review_rating_bounds() {
        let ok = ReviewRequest {
            name: "Mia".to_string(),
            rating: 5,
            comment: "Lovely stay".to_string(),
        };
        assert!(check(&ok).is_ok());

        let low = ReviewRequest { rating: 0, ..ok.clone() };
        let err = check(&low).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.fields.is_some());

        let high = ReviewRequest { rating: 6, ..ok };
        assert!(check(&high).is_err());
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let req = RegisterRequest {
            username: "newuser".to_string(),
            email: "not-an-email".to_string(),
            password: "x".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert!(check(&req).is_err());
    }

    #[test]
    fn test_empty_comment_rejected() {
        let req = CommentRequest {
            body: String::new(),
        };
        assert!(check(&req).is_err());
    }

    #[test]
    fn test_report_location_required() {
        let req = FileReportRequest {
            category: ReportCategory::Maintenance,
            priority: None,
            title: "Cracked tile".to_string(),
            description: "Tile cracked by the pool steps".to_string(),
            location: String::new(),
            on_behalf_of: None,
        };
        let err = check(&req).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let ok = FileReportRequest {
            location: "Pool steps".to_string(),
            ..req
        };
        assert!(check(&ok).is_ok());
    }
}
