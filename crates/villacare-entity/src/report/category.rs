//! Report category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of issue or request a villa report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "report_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportCategory {
    /// Maintenance issue.
    Maintenance,
    /// Cleaning request.
    Cleaning,
    /// Security concern.
    Security,
    /// Landscaping.
    Landscaping,
    /// Pool or spa issue.
    Pool,
    /// Emergency.
    Emergency,
    /// Anything else.
    Other,
}

impl ReportCategory {
    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Cleaning => "cleaning",
            Self::Security => "security",
            Self::Landscaping => "landscaping",
            Self::Pool => "pool",
            Self::Emergency => "emergency",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportCategory {
    type Err = villacare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maintenance" => Ok(Self::Maintenance),
            "cleaning" => Ok(Self::Cleaning),
            "security" => Ok(Self::Security),
            "landscaping" => Ok(Self::Landscaping),
            "pool" => Ok(Self::Pool),
            "emergency" => Ok(Self::Emergency),
            "other" => Ok(Self::Other),
            _ => Err(villacare_core::AppError::validation(format!(
                "Invalid report category: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "pool".parse::<ReportCategory>().unwrap(),
            ReportCategory::Pool
        );
        assert_eq!(
            "EMERGENCY".parse::<ReportCategory>().unwrap(),
            ReportCategory::Emergency
        );
        assert!("plumbing".parse::<ReportCategory>().is_err());
    }
}
