//! Work experience entry within a resume

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{DateRange, RichTextContent, WorkExperienceId};

/// Work experience entry owned by the Resume aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub(crate) id: WorkExperienceId,
    pub(crate) company: String,
    pub(crate) position: String,
    pub(crate) period: DateRange,
    pub(crate) description: Option<RichTextContent>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl WorkExperience {
    /// Create a new entry (internal use by the Resume aggregate)
    pub(crate) fn new(
        company: String,
        position: String,
        period: DateRange,
        description: Option<RichTextContent>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: WorkExperienceId::new(),
            company,
            position,
            period,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute an entry from persistence
    pub fn reconstitute(
        id: WorkExperienceId,
        company: String,
        position: String,
        period: DateRange,
        description: Option<RichTextContent>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            company,
            position,
            period,
            description,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> WorkExperienceId {
        self.id
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn period(&self) -> DateRange {
        self.period
    }

    pub fn description(&self) -> Option<&RichTextContent> {
        self.description.as_ref()
    }
}
