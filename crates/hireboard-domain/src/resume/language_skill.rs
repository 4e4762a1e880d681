//! Language skill entry within a resume

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enumerations::LanguageProficiency;
use crate::value_objects::LanguageSkillId;

/// Language skill entry owned by the Resume aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub(crate) id: LanguageSkillId,
    pub(crate) language: String,
    pub(crate) proficiency: LanguageProficiency,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl LanguageSkill {
    /// Create a new entry (internal use by the Resume aggregate)
    pub(crate) fn new(language: String, proficiency: LanguageProficiency) -> Self {
        let now = Utc::now();
        Self {
            id: LanguageSkillId::new(),
            language,
            proficiency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute an entry from persistence
    pub fn reconstitute(
        id: LanguageSkillId,
        language: String,
        proficiency: LanguageProficiency,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            language,
            proficiency,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> LanguageSkillId {
        self.id
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn proficiency(&self) -> LanguageProficiency {
        self.proficiency
    }
}
