//! Closed enumerations with stable wire codes
//!
//! Each enumeration keeps an explicit registration table (`ALL`) and is
//! looked up by code or display name; unknown inputs yield `None`, never a
//! panic. The status enumerations additionally carry their lifecycle rules
//! as pure transition tables.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! smart_enum {
    (
        $(#[$doc:meta])*
        $name:ident {
            $($variant:ident => ($code:literal, $display:literal)),+ $(,)?
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable wire/storage code
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Display name
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $display),+
                }
            }

            /// Look up a member by its code
            pub fn from_code(code: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|m| m.code() == code)
            }

            /// Look up a member by its display name
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|m| m.name() == name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}

smart_enum!(
    /// Type of employment a candidate accepts or a vacancy offers
    EmploymentType {
        FullTime => ("FT", "Full-time"),
        PartTime => ("PT", "Part-time"),
        Contract => ("CT", "Contract"),
        Internship => ("IN", "Internship"),
        Temporary => ("TP", "Temporary"),
    }
);

smart_enum!(
    /// Where the work happens
    WorkArrangement {
        OnSite => ("ON", "On-site"),
        Remote => ("RM", "Remote"),
        Hybrid => ("HY", "Hybrid"),
    }
);

smart_enum!(
    /// CEFR-style language proficiency levels
    LanguageProficiency {
        Beginner => ("A1", "Beginner"),
        Elementary => ("A2", "Elementary"),
        Intermediate => ("B1", "Intermediate"),
        UpperIntermediate => ("B2", "Upper-intermediate"),
        Advanced => ("C1", "Advanced"),
        Proficient => ("C2", "Proficient"),
        Native => ("NT", "Native"),
    }
);

smart_enum!(
    /// Vacancy lifecycle states
    VacancyStatus {
        Draft => ("DR", "Draft"),
        Registered => ("RG", "Registered"),
        Published => ("PB", "Published"),
        Archived => ("AR", "Archived"),
    }
);

impl VacancyStatus {
    /// Single source of truth for legal vacancy transitions
    ///
    /// Draft → Registered → Published ⇄ Archived. Self-transitions are
    /// never legal.
    pub fn can_transition_to(&self, target: VacancyStatus) -> bool {
        matches!(
            (self, target),
            (VacancyStatus::Draft, VacancyStatus::Registered)
                | (VacancyStatus::Registered, VacancyStatus::Published)
                | (VacancyStatus::Published, VacancyStatus::Archived)
                | (VacancyStatus::Archived, VacancyStatus::Published)
        )
    }

    /// Whether vacancy fields may be mutated in this state
    pub fn is_editable(&self) -> bool {
        matches!(self, VacancyStatus::Draft | VacancyStatus::Published)
    }
}

smart_enum!(
    /// Resume lifecycle states
    ResumeStatus {
        Draft => ("DR", "Draft"),
        Published => ("PB", "Published"),
    }
);

impl ResumeStatus {
    /// Draft ⇄ Published, each state transitions only to the other
    pub fn can_transition_to(&self, target: ResumeStatus) -> bool {
        *self != target
    }
}

smart_enum!(
    /// Role a user plays on the platform
    UserRole {
        Seeker => ("SK", "Seeker"),
        Recruiter => ("RC", "Recruiter"),
        Admin => ("AD", "Admin"),
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrip_for_all_enumerations() {
        for m in EmploymentType::ALL {
            assert_eq!(EmploymentType::from_code(m.code()), Some(*m));
        }
        for m in WorkArrangement::ALL {
            assert_eq!(WorkArrangement::from_code(m.code()), Some(*m));
        }
        for m in LanguageProficiency::ALL {
            assert_eq!(LanguageProficiency::from_code(m.code()), Some(*m));
        }
        for m in VacancyStatus::ALL {
            assert_eq!(VacancyStatus::from_code(m.code()), Some(*m));
        }
        for m in ResumeStatus::ALL {
            assert_eq!(ResumeStatus::from_code(m.code()), Some(*m));
        }
        for m in UserRole::ALL {
            assert_eq!(UserRole::from_code(m.code()), Some(*m));
        }
    }

    #[test]
    fn test_from_name_lookup() {
        assert_eq!(
            EmploymentType::from_name("Full-time"),
            Some(EmploymentType::FullTime)
        );
        assert_eq!(EmploymentType::from_name("full-time"), None);
    }

    #[test]
    fn test_unknown_code_is_none() {
        assert_eq!(EmploymentType::from_code("XX"), None);
        assert_eq!(VacancyStatus::from_code(""), None);
    }

    #[test]
    fn test_codes_unique_within_type() {
        for (i, a) in VacancyStatus::ALL.iter().enumerate() {
            for b in &VacancyStatus::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_vacancy_transition_table_exhaustive() {
        use VacancyStatus::*;
        let legal = [
            (Draft, Registered),
            (Registered, Published),
            (Published, Archived),
            (Archived, Published),
        ];
        for s in VacancyStatus::ALL {
            for t in VacancyStatus::ALL {
                let expected = legal.contains(&(*s, *t));
                assert_eq!(
                    s.can_transition_to(*t),
                    expected,
                    "{:?} -> {:?}",
                    s,
                    t
                );
            }
        }
    }

    #[test]
    fn test_vacancy_editability() {
        assert!(VacancyStatus::Draft.is_editable());
        assert!(VacancyStatus::Published.is_editable());
        assert!(!VacancyStatus::Registered.is_editable());
        assert!(!VacancyStatus::Archived.is_editable());
    }

    #[test]
    fn test_resume_transition_table() {
        assert!(ResumeStatus::Draft.can_transition_to(ResumeStatus::Published));
        assert!(ResumeStatus::Published.can_transition_to(ResumeStatus::Draft));
        assert!(!ResumeStatus::Draft.can_transition_to(ResumeStatus::Draft));
        assert!(!ResumeStatus::Published.can_transition_to(ResumeStatus::Published));
    }
}
