//! Phone number value object

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

// International format: optional leading +, 7 to 15 digits (E.164 shape).
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("phone regex is valid"));

/// Validated phone number in international format with its region code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber {
    number: String,
    region_code: String,
}

impl PhoneNumber {
    pub const MAX_NUMBER_LENGTH: usize = 15;

    /// Create a validated phone number
    ///
    /// Separator characters (spaces, hyphens, parentheses) are stripped
    /// before validation; the region code must be a 2-letter country code.
    pub fn create(number: &str, region_code: &str) -> DomainResult<Self> {
        let normalized: String = number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();

        if normalized.is_empty() {
            return Err(DomainError::validation(
                "PhoneNumber.Empty",
                "Phone number cannot be empty",
            ));
        }
        let digits = normalized.trim_start_matches('+');
        if digits.len() > Self::MAX_NUMBER_LENGTH {
            return Err(DomainError::validation(
                "PhoneNumber.TooLong",
                format!(
                    "Phone number cannot exceed {} digits",
                    Self::MAX_NUMBER_LENGTH
                ),
            ));
        }
        if !PHONE_RE.is_match(&normalized) {
            return Err(DomainError::validation(
                "PhoneNumber.InvalidFormat",
                format!("'{}' is not a valid international phone number", number),
            ));
        }

        let region_code = region_code.trim();
        if region_code.len() != 2 || !region_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::validation(
                "PhoneNumber.InvalidRegionCode",
                format!("'{}' is not a 2-letter region code", region_code),
            ));
        }

        Ok(Self {
            number: normalized,
            region_code: region_code.to_ascii_uppercase(),
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn region_code(&self) -> &str {
        &self.region_code
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number, self.region_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_number() {
        let phone = PhoneNumber::create("+380 (50) 123-45-67", "ua").unwrap();
        assert_eq!(phone.number(), "+380501234567");
        assert_eq!(phone.region_code(), "UA");
    }

    #[test]
    fn test_empty_number_rejected() {
        let err = PhoneNumber::create("", "US").unwrap_err();
        assert_eq!(err.code(), "PhoneNumber.Empty");
    }

    #[test]
    fn test_too_long_number_rejected() {
        let err = PhoneNumber::create("+1234567890123456", "US").unwrap_err();
        assert_eq!(err.code(), "PhoneNumber.TooLong");
    }

    #[test]
    fn test_non_digit_number_rejected() {
        let err = PhoneNumber::create("+12345abc90", "US").unwrap_err();
        assert_eq!(err.code(), "PhoneNumber.InvalidFormat");
    }

    #[test]
    fn test_invalid_region_code_rejected() {
        let err = PhoneNumber::create("+380501234567", "UKR").unwrap_err();
        assert_eq!(err.code(), "PhoneNumber.InvalidRegionCode");
    }
}
