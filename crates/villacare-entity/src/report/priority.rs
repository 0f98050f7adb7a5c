//! Report priority enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority assigned to a villa report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "report_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportPriority {
    /// Low priority.
    Low,
    /// Medium priority (the default for new reports).
    Medium,
    /// High priority.
    High,
    /// Urgent.
    Urgent,
}

impl ReportPriority {
    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Bootstrap badge color used by front-ends to render this priority.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Low => "success",
            Self::Medium => "warning",
            Self::High => "danger",
            Self::Urgent => "dark",
        }
    }
}

impl Default for ReportPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for ReportPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportPriority {
    type Err = villacare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(villacare_core::AppError::validation(format!(
                "Invalid report priority: '{s}'. Expected one of: low, medium, high, urgent"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        assert_eq!(ReportPriority::default(), ReportPriority::Medium);
    }

    #[test]
    fn test_badge_colors() {
        assert_eq!(ReportPriority::Low.badge_color(), "success");
        assert_eq!(ReportPriority::Urgent.badge_color(), "dark");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "urgent".parse::<ReportPriority>().unwrap(),
            ReportPriority::Urgent
        );
        assert!("critical".parse::<ReportPriority>().is_err());
    }
}
