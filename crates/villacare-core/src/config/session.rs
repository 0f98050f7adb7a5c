//! Session and password policy configuration.

use serde::{Deserialize, Serialize};

/// Session management and password policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Absolute session lifetime in hours.
    #[serde(default = "default_lifetime_hours")]
    pub lifetime_hours: u64,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lifetime_hours: default_lifetime_hours(),
            password_min_length: default_password_min_length(),
        }
    }
}

fn default_lifetime_hours() -> u64 {
    24
}

fn default_password_min_length() -> u32 {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.lifetime_hours, 24);
        assert_eq!(config.password_min_length, 8);
    }
}
