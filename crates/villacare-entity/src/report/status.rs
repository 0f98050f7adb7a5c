//! Report status enumeration.
//!
//! Status drives the report lifecycle. A report always starts `pending`;
//! staff may set any of the four values afterwards in any order; no
//! transition ordering is enforced and no state is terminal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a villa report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "report_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Filed and awaiting triage (the initial state).
    Pending,
    /// Staff are working on it.
    InProgress,
    /// Work finished.
    Completed,
    /// Abandoned.
    Cancelled,
}

impl ReportStatus {
    /// Return the status as a lowercase snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Bootstrap badge color used by front-ends to render this status.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Pending => "warning",
            Self::InProgress => "info",
            Self::Completed => "success",
            Self::Cancelled => "secondary",
        }
    }
}

impl Default for ReportStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = villacare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(villacare_core::AppError::validation(format!(
                "Invalid report status: '{s}'. Expected one of: pending, in_progress, completed, cancelled"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(ReportStatus::default(), ReportStatus::Pending);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "in_progress".parse::<ReportStatus>().unwrap(),
            ReportStatus::InProgress
        );
        assert!("done".parse::<ReportStatus>().is_err());
    }

    #[test]
    fn test_badge_colors() {
        assert_eq!(ReportStatus::Pending.badge_color(), "warning");
        assert_eq!(ReportStatus::Completed.badge_color(), "success");
    }
}
