//! Subscription package entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Billing cadence of a subscription package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "package_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    /// Billed weekly.
    Weekly,
    /// Billed monthly.
    Monthly,
    /// Billed yearly.
    Yearly,
}

impl PackageType {
    /// Return the package type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = villacare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(villacare_core::AppError::validation(format!(
                "Invalid package type: '{s}'. Expected one of: weekly, monthly, yearly"
            ))),
        }
    }
}

/// A villa service subscription package.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Package {
    /// Unique package identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Billing cadence.
    pub package_type: PackageType,
    /// Marketing description.
    pub description: String,
    /// Price in cents.
    pub price_cents: i64,
    /// Feature list, one feature per line.
    pub features: String,
    /// Whether the package is highlighted on the landing page.
    pub is_featured: bool,
    /// When the package was created.
    pub created_at: DateTime<Utc>,
}

impl Package {
    /// Split the newline-separated feature text into individual features.
    pub fn feature_list(&self) -> Vec<&str> {
        self.features
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_list_skips_blank_lines() {
        let package = Package {
            id: Uuid::new_v4(),
            name: "Gold".to_string(),
            package_type: PackageType::Monthly,
            description: "Full service".to_string(),
            price_cents: 49_900,
            features: "Weekly cleaning\n\n  Pool care  \n".to_string(),
            is_featured: true,
            created_at: Utc::now(),
        };
        assert_eq!(package.feature_list(), vec!["Weekly cleaning", "Pool care"]);
    }

    #[test]
    fn test_package_type_from_str() {
        assert_eq!("yearly".parse::<PackageType>().unwrap(), PackageType::Yearly);
        assert!("daily".parse::<PackageType>().is_err());
    }
}
