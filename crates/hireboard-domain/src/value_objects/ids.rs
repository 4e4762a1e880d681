//! Typed identifiers for aggregates and child entities
//!
//! One identifier type per entity kind. The types are deliberately not
//! interchangeable so a `ResumeId` can never be passed where a `VacancyId`
//! is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Generate a new random identifier
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Create from string representation
            pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(uuid::Uuid::parse_str(s)?))
            }

            /// Underlying UUID value
            pub fn as_uuid(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(
    /// Vacancy aggregate identifier
    VacancyId
);
define_id!(
    /// Resume aggregate identifier
    ResumeId
);
define_id!(
    /// Company aggregate identifier
    CompanyId
);
define_id!(
    /// User aggregate identifier
    UserId
);
define_id!(
    /// Recruiter-to-company link identifier
    CompanyUserId
);
define_id!(
    /// Vacancy application identifier
    ApplicationId
);
define_id!(
    /// Vacancy category identifier
    CategoryId
);
define_id!(
    /// Education entry identifier within a resume
    EducationId
);
define_id!(
    /// Work experience entry identifier within a resume
    WorkExperienceId
);
define_id!(
    /// Language skill entry identifier within a resume
    LanguageSkillId
);
define_id!(
    /// Refresh token identifier
    RefreshTokenId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_string_roundtrip() {
        let id = VacancyId::new();
        let parsed = VacancyId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_from_invalid_string() {
        assert!(ResumeId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(CompanyId::new(), CompanyId::new());
    }
}
