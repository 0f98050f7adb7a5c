//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in VillaCare.
///
/// Staff can see and mutate every villa report; residents only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrative staff with cross-user visibility and mutation rights.
    Staff,
    /// Regular registered user with a villa subscription.
    Resident,
}

impl UserRole {
    /// Check if this role carries staff privileges.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Staff)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Resident => "resident",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = villacare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "staff" => Ok(Self::Staff),
            "resident" => Ok(Self::Resident),
            _ => Err(villacare_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: staff, resident"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_staff() {
        assert!(UserRole::Staff.is_staff());
        assert!(!UserRole::Resident.is_staff());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("staff".parse::<UserRole>().unwrap(), UserRole::Staff);
        assert_eq!("RESIDENT".parse::<UserRole>().unwrap(), UserRole::Resident);
        assert!("admin".parse::<UserRole>().is_err());
    }
}
