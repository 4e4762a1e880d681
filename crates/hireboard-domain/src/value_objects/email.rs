//! Email address value object

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub const MAX_LENGTH: usize = 256;

    /// Create a validated email address
    ///
    /// Input is trimmed before validation.
    pub fn create(value: &str) -> DomainResult<Self> {
        let value = value.trim();

        if value.is_empty() {
            return Err(DomainError::validation(
                "Email.Empty",
                "Email cannot be empty",
            ));
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                "Email.TooLong",
                format!("Email cannot exceed {} characters", Self::MAX_LENGTH),
            ));
        }
        if !EMAIL_RE.is_match(value) {
            return Err(DomainError::validation(
                "Email.InvalidFormat",
                format!("'{}' is not a valid email address", value),
            ));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_valid_email() {
        let email = Email::create("seeker@example.com").unwrap();
        assert_eq!(email.as_str(), "seeker@example.com");
    }

    #[test]
    fn test_email_trimmed() {
        let email = Email::create("  seeker@example.com  ").unwrap();
        assert_eq!(email.as_str(), "seeker@example.com");
    }

    #[test]
    fn test_empty_email_rejected() {
        let err = Email::create("   ").unwrap_err();
        assert_eq!(err.code(), "Email.Empty");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_email_too_long_rejected() {
        let local = "a".repeat(250);
        let err = Email::create(&format!("{}@example.com", local)).unwrap_err();
        assert_eq!(err.code(), "Email.TooLong");
    }

    #[test]
    fn test_malformed_email_rejected() {
        for input in ["no-at-sign", "two@@example.com", "user@", "@host.com"] {
            let err = Email::create(input).unwrap_err();
            assert_eq!(err.code(), "Email.InvalidFormat", "input: {}", input);
        }
    }
}
