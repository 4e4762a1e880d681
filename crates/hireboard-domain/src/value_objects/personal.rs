//! Personal and contact information value objects

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{Email, PhoneNumber};

/// Person's name and optional birth date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    birth_date: Option<NaiveDate>,
}

impl PersonalInfo {
    pub const MAX_NAME_LENGTH: usize = 100;

    /// Create validated personal info
    pub fn create(
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
        birth_date: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        let mut violations = Vec::new();

        for (field, value) in [("FirstName", first_name), ("LastName", last_name)] {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                violations.push(DomainError::validation(
                    format!("PersonalInfo.{}Required", field),
                    format!("{} is required", field),
                ));
            } else if trimmed.chars().count() > Self::MAX_NAME_LENGTH {
                violations.push(DomainError::validation(
                    format!("PersonalInfo.{}TooLong", field),
                    format!("{} cannot exceed {} characters", field, Self::MAX_NAME_LENGTH),
                ));
            }
        }
        if let Some(m) = middle_name {
            if m.trim().chars().count() > Self::MAX_NAME_LENGTH {
                violations.push(DomainError::validation(
                    "PersonalInfo.MiddleNameTooLong",
                    format!(
                        "MiddleName cannot exceed {} characters",
                        Self::MAX_NAME_LENGTH
                    ),
                ));
            }
        }
        if let Some(birth) = birth_date {
            if birth > Utc::now().date_naive() {
                violations.push(DomainError::validation(
                    "PersonalInfo.BirthDateInFuture",
                    "Birth date cannot be in the future",
                ));
            }
        }

        if violations.len() == 1 {
            return Err(violations.remove(0));
        }
        if !violations.is_empty() {
            return Err(DomainError::validation_set(
                "PersonalInfo.Invalid",
                violations,
            ));
        }

        Ok(Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            middle_name: middle_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            birth_date,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// How a candidate can be reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    email: Email,
    phone: Option<PhoneNumber>,
}

impl ContactInfo {
    /// Create contact info from already-validated parts
    pub fn new(email: Email, phone: Option<PhoneNumber>) -> Self {
        Self { email, phone }
    }

    /// Create contact info from raw input, aggregating field violations
    pub fn create(email: &str, phone: Option<(&str, &str)>) -> DomainResult<Self> {
        let mut violations = Vec::new();

        let email = match Email::create(email) {
            Ok(e) => Some(e),
            Err(e) => {
                violations.push(e);
                None
            }
        };
        let phone = match phone {
            Some((number, region)) => match PhoneNumber::create(number, region) {
                Ok(p) => Some(p),
                Err(e) => {
                    violations.push(e);
                    None
                }
            },
            None => None,
        };

        if violations.len() == 1 {
            return Err(violations.remove(0));
        }
        if !violations.is_empty() {
            return Err(DomainError::validation_set("ContactInfo.Invalid", violations));
        }

        Ok(Self {
            email: email.expect("email validated above"),
            phone,
        })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_info_valid() {
        let info = PersonalInfo::create("Anna", "Kovalenko", None, None).unwrap();
        assert_eq!(info.full_name(), "Anna Kovalenko");
    }

    #[test]
    fn test_personal_info_missing_names_aggregated() {
        let err = PersonalInfo::create("", "", None, None).unwrap_err();
        assert_eq!(err.code(), "PersonalInfo.Invalid");
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_personal_info_future_birth_date_rejected() {
        let future = Utc::now().date_naive() + chrono::Duration::days(1);
        let err = PersonalInfo::create("Anna", "Kovalenko", None, Some(future)).unwrap_err();
        assert_eq!(err.code(), "PersonalInfo.BirthDateInFuture");
    }

    #[test]
    fn test_contact_info_valid() {
        let contact =
            ContactInfo::create("anna@example.com", Some(("+380501234567", "UA"))).unwrap();
        assert_eq!(contact.email().as_str(), "anna@example.com");
        assert_eq!(contact.phone().unwrap().region_code(), "UA");
    }

    #[test]
    fn test_contact_info_aggregates_both_failures() {
        let err = ContactInfo::create("bad-email", Some(("abc", "UA"))).unwrap_err();
        assert_eq!(err.code(), "ContactInfo.Invalid");
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_contact_info_single_failure_not_wrapped() {
        let err = ContactInfo::create("bad-email", None).unwrap_err();
        assert_eq!(err.code(), "Email.InvalidFormat");
    }
}
