//! Cover letter and desired position value objects

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Cover letter attached to an application
///
/// Whitespace-only input is trimmed to an empty letter, which is valid; an
/// application simply carries no message then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverLetter(String);

impl CoverLetter {
    pub const MAX_LENGTH: usize = 10_000;

    /// Create a validated cover letter
    pub fn create(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                "CoverLetter.TooLong",
                format!("Cover letter cannot exceed {} characters", Self::MAX_LENGTH),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CoverLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position a candidate is looking for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredPosition(String);

impl DesiredPosition {
    pub const MAX_LENGTH: usize = 200;

    /// Create a validated desired position
    pub fn create(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                "DesiredPosition.Empty",
                "Desired position cannot be empty",
            ));
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                "DesiredPosition.TooLong",
                format!(
                    "Desired position cannot exceed {} characters",
                    Self::MAX_LENGTH
                ),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DesiredPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_letter_trims_whitespace_only_to_empty() {
        let letter = CoverLetter::create("   \n\t  ").unwrap();
        assert!(letter.is_empty());
    }

    #[test]
    fn test_cover_letter_preserves_content() {
        let letter = CoverLetter::create("  I would love to join.  ").unwrap();
        assert_eq!(letter.as_str(), "I would love to join.");
    }

    #[test]
    fn test_cover_letter_too_long_rejected() {
        let big = "a".repeat(CoverLetter::MAX_LENGTH + 1);
        let err = CoverLetter::create(&big).unwrap_err();
        assert_eq!(err.code(), "CoverLetter.TooLong");
    }

    #[test]
    fn test_cover_letter_multibyte_at_limit_accepted() {
        let letter = CoverLetter::create(&"є".repeat(CoverLetter::MAX_LENGTH)).unwrap();
        assert_eq!(letter.as_str().chars().count(), CoverLetter::MAX_LENGTH);
    }

    #[test]
    fn test_desired_position_empty_rejected() {
        let err = DesiredPosition::create("  ").unwrap_err();
        assert_eq!(err.code(), "DesiredPosition.Empty");
    }
}
