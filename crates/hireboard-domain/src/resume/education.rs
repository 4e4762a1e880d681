//! Education entry within a resume

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{DateRange, EducationId};

/// Education entry owned by the Resume aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub(crate) id: EducationId,
    pub(crate) institution: String,
    pub(crate) degree: Option<String>,
    pub(crate) field_of_study: Option<String>,
    pub(crate) period: DateRange,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Education {
    /// Create a new entry (internal use by the Resume aggregate)
    pub(crate) fn new(
        institution: String,
        degree: Option<String>,
        field_of_study: Option<String>,
        period: DateRange,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EducationId::new(),
            institution,
            degree,
            field_of_study,
            period,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute an entry from persistence
    pub fn reconstitute(
        id: EducationId,
        institution: String,
        degree: Option<String>,
        field_of_study: Option<String>,
        period: DateRange,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            institution,
            degree,
            field_of_study,
            period,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> EducationId {
        self.id
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn degree(&self) -> Option<&str> {
        self.degree.as_deref()
    }

    pub fn field_of_study(&self) -> Option<&str> {
        self.field_of_study.as_deref()
    }

    pub fn period(&self) -> DateRange {
        self.period
    }
}
