//! Password policy enforcement for new passwords.

use villacare_core::config::SessionConfig;
use villacare_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            min_length: config.password_min_length as usize,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if !password.chars().any(|c| c.is_alphabetic()) {
            return Err(AppError::validation(
                "Password must contain at least one letter",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one digit",
            ));
        }

        // Use zxcvbn for entropy check
        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Two {
            return Err(AppError::validation(
                "Password is too weak. Please use a less guessable password.",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use villacare_core::error::ErrorKind;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&SessionConfig::default())
    }

    #[test]
    fn test_too_short_rejected() {
        let err = validator().validate("aB1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_missing_digit_rejected() {
        assert!(validator().validate("onlyletters").is_err());
    }

    #[test]
    fn test_missing_letter_rejected() {
        assert!(validator().validate("1234567890").is_err());
    }

    #[test]
    fn test_guessable_password_rejected() {
        assert!(validator().validate("password1").is_err());
    }

    #[test]
    fn test_reasonable_password_accepted() {
        assert!(validator().validate("tamarind-villa-42").is_ok());
    }
}
