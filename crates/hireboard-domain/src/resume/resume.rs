//! Resume aggregate root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enumerations::{EmploymentType, LanguageProficiency, ResumeStatus, WorkArrangement};
use crate::errors::{DomainError, DomainResult};
use crate::events::resume::*;
use crate::events::DomainEvent;
use crate::value_objects::{
    ContactInfo, DateRange, DesiredPosition, EducationId, LanguageSkillId, Location, Money,
    PersonalInfo, ResumeId, RichTextContent, UserId, WorkExperienceId,
};

use super::education::Education;
use super::language_skill::LanguageSkill;
use super::work_experience::WorkExperience;

/// Resume aggregate root
///
/// Lifecycle is Draft ⇄ Published; profile fields stay editable in both
/// states, only the transitions themselves are gated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    id: ResumeId,
    seeker_id: UserId,
    personal_info: PersonalInfo,
    contact_info: ContactInfo,
    location: Location,
    desired_position: DesiredPosition,
    salary_expectation: Money,
    skills_description: RichTextContent,
    employment_types: Vec<EmploymentType>,
    work_arrangements: Vec<WorkArrangement>,
    education: Vec<Education>,
    work_experience: Vec<WorkExperience>,
    language_skills: Vec<LanguageSkill>,
    status: ResumeStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    concurrency_version: u64,
}

impl Resume {
    pub const MAX_ENTRY_TEXT_LENGTH: usize = 200;
    pub const MAX_LANGUAGE_LENGTH: usize = 100;

    /// Create a new resume in draft
    pub fn create(
        seeker_id: UserId,
        personal_info: PersonalInfo,
        contact_info: ContactInfo,
        location: Location,
        desired_position: DesiredPosition,
        salary_expectation: Money,
        skills_description: RichTextContent,
    ) -> DomainResult<(Self, Box<dyn DomainEvent>)> {
        let id = ResumeId::new();
        let now = Utc::now();
        let resume = Self {
            id,
            seeker_id,
            personal_info,
            contact_info,
            location,
            desired_position,
            salary_expectation,
            skills_description,
            employment_types: Vec::new(),
            work_arrangements: Vec::new(),
            education: Vec::new(),
            work_experience: Vec::new(),
            language_skills: Vec::new(),
            status: ResumeStatus::Draft,
            created_at: now,
            updated_at: now,
            concurrency_version: 1,
        };

        let event = ResumeCreated::new(id.as_uuid(), seeker_id.as_uuid());
        Ok((resume, Box::new(event)))
    }

    /// Reconstitute a resume from persistence
    ///
    /// Bypasses validation since data was validated during original creation.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ResumeId,
        seeker_id: UserId,
        personal_info: PersonalInfo,
        contact_info: ContactInfo,
        location: Location,
        desired_position: DesiredPosition,
        salary_expectation: Money,
        skills_description: RichTextContent,
        employment_types: Vec<EmploymentType>,
        work_arrangements: Vec<WorkArrangement>,
        education: Vec<Education>,
        work_experience: Vec<WorkExperience>,
        language_skills: Vec<LanguageSkill>,
        status: ResumeStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        concurrency_version: u64,
    ) -> Self {
        Self {
            id,
            seeker_id,
            personal_info,
            contact_info,
            location,
            desired_position,
            salary_expectation,
            skills_description,
            employment_types,
            work_arrangements,
            education,
            work_experience,
            language_skills,
            status,
            created_at,
            updated_at,
            concurrency_version,
        }
    }

    // ========================================================================
    // Profile Mutations
    // ========================================================================

    pub fn update_personal_info(&mut self, personal_info: PersonalInfo) {
        self.personal_info = personal_info;
        self.touch();
    }

    pub fn update_contact_info(&mut self, contact_info: ContactInfo) {
        self.contact_info = contact_info;
        self.touch();
    }

    pub fn update_location(&mut self, location: Location) {
        self.location = location;
        self.touch();
    }

    pub fn update_desired_position(&mut self, desired_position: DesiredPosition) {
        self.desired_position = desired_position;
        self.touch();
    }

    pub fn update_salary_expectation(&mut self, salary_expectation: Money) {
        self.salary_expectation = salary_expectation;
        self.touch();
    }

    pub fn update_skills_description(&mut self, skills_description: RichTextContent) {
        self.skills_description = skills_description;
        self.touch();
    }

    // ========================================================================
    // Employment Types & Work Arrangements
    // ========================================================================

    /// Add an employment type by its code
    pub fn add_employment_type(&mut self, code: &str) -> DomainResult<()> {
        let employment_type = EmploymentType::from_code(code).ok_or_else(|| {
            DomainError::validation(
                "Resume.UnknownEmploymentType",
                format!("'{}' is not a known employment type code", code),
            )
        })?;
        if self.employment_types.contains(&employment_type) {
            return Err(DomainError::conflict(
                "Resume.DuplicateEmploymentType",
                format!("Employment type {} is already present", employment_type),
            ));
        }
        self.employment_types.push(employment_type);
        self.touch();
        Ok(())
    }

    /// Remove an employment type by its code
    pub fn remove_employment_type(&mut self, code: &str) -> DomainResult<()> {
        let employment_type = EmploymentType::from_code(code).ok_or_else(|| {
            DomainError::validation(
                "Resume.UnknownEmploymentType",
                format!("'{}' is not a known employment type code", code),
            )
        })?;
        let before = self.employment_types.len();
        self.employment_types.retain(|t| *t != employment_type);
        if self.employment_types.len() == before {
            return Err(DomainError::not_found("EmploymentType", code));
        }
        self.touch();
        Ok(())
    }

    /// Add a work arrangement by its code
    pub fn add_work_arrangement(&mut self, code: &str) -> DomainResult<()> {
        let arrangement = WorkArrangement::from_code(code).ok_or_else(|| {
            DomainError::validation(
                "Resume.UnknownWorkArrangement",
                format!("'{}' is not a known work arrangement code", code),
            )
        })?;
        if self.work_arrangements.contains(&arrangement) {
            return Err(DomainError::conflict(
                "Resume.DuplicateWorkArrangement",
                format!("Work arrangement {} is already present", arrangement),
            ));
        }
        self.work_arrangements.push(arrangement);
        self.touch();
        Ok(())
    }

    /// Remove a work arrangement by its code
    pub fn remove_work_arrangement(&mut self, code: &str) -> DomainResult<()> {
        let arrangement = WorkArrangement::from_code(code).ok_or_else(|| {
            DomainError::validation(
                "Resume.UnknownWorkArrangement",
                format!("'{}' is not a known work arrangement code", code),
            )
        })?;
        let before = self.work_arrangements.len();
        self.work_arrangements.retain(|a| *a != arrangement);
        if self.work_arrangements.len() == before {
            return Err(DomainError::not_found("WorkArrangement", code));
        }
        self.touch();
        Ok(())
    }

    // ========================================================================
    // Education
    // ========================================================================

    /// Add an education entry
    pub fn add_education(
        &mut self,
        institution: String,
        degree: Option<String>,
        field_of_study: Option<String>,
        period: DateRange,
    ) -> DomainResult<EducationId> {
        Self::validate_entry_text("Education.Institution", &institution, true)?;
        if let Some(d) = &degree {
            Self::validate_entry_text("Education.Degree", d, false)?;
        }
        if let Some(f) = &field_of_study {
            Self::validate_entry_text("Education.FieldOfStudy", f, false)?;
        }

        let entry = Education::new(institution, degree, field_of_study, period);
        let entry_id = entry.id();
        self.education.push(entry);
        self.touch();
        Ok(entry_id)
    }

    /// Replace an existing education entry
    ///
    /// All fields are overwritten; passing `None` for degree or field of
    /// study clears them.
    pub fn update_education(
        &mut self,
        education_id: EducationId,
        institution: String,
        degree: Option<String>,
        field_of_study: Option<String>,
        period: DateRange,
    ) -> DomainResult<()> {
        Self::validate_entry_text("Education.Institution", &institution, true)?;
        if let Some(d) = &degree {
            Self::validate_entry_text("Education.Degree", d, false)?;
        }
        if let Some(f) = &field_of_study {
            Self::validate_entry_text("Education.FieldOfStudy", f, false)?;
        }

        let entry = self
            .education
            .iter_mut()
            .find(|e| e.id() == education_id)
            .ok_or_else(|| DomainError::not_found("Education", education_id))?;

        entry.institution = institution;
        entry.degree = degree;
        entry.field_of_study = field_of_study;
        entry.period = period;
        entry.updated_at = Utc::now();
        self.touch();
        Ok(())
    }

    /// Remove an education entry by identifier
    pub fn remove_education(&mut self, education_id: EducationId) -> DomainResult<()> {
        let before = self.education.len();
        self.education.retain(|e| e.id() != education_id);
        if self.education.len() == before {
            return Err(DomainError::not_found("Education", education_id));
        }
        self.touch();
        Ok(())
    }

    // ========================================================================
    // Work Experience
    // ========================================================================

    /// Add a work experience entry
    pub fn add_work_experience(
        &mut self,
        company: String,
        position: String,
        period: DateRange,
        description: Option<RichTextContent>,
    ) -> DomainResult<WorkExperienceId> {
        Self::validate_entry_text("WorkExperience.Company", &company, true)?;
        Self::validate_entry_text("WorkExperience.Position", &position, true)?;

        let entry = WorkExperience::new(company, position, period, description);
        let entry_id = entry.id();
        self.work_experience.push(entry);
        self.touch();
        Ok(entry_id)
    }

    /// Remove a work experience entry by identifier
    pub fn remove_work_experience(
        &mut self,
        work_experience_id: WorkExperienceId,
    ) -> DomainResult<()> {
        let before = self.work_experience.len();
        self.work_experience.retain(|w| w.id() != work_experience_id);
        if self.work_experience.len() == before {
            return Err(DomainError::not_found("WorkExperience", work_experience_id));
        }
        self.touch();
        Ok(())
    }

    // ========================================================================
    // Language Skills
    // ========================================================================

    /// Add a language skill; the same language cannot appear twice
    pub fn add_language_skill(
        &mut self,
        language: String,
        proficiency: LanguageProficiency,
    ) -> DomainResult<LanguageSkillId> {
        let trimmed = language.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                "LanguageSkill.LanguageRequired",
                "Language cannot be empty",
            ));
        }
        if trimmed.chars().count() > Self::MAX_LANGUAGE_LENGTH {
            return Err(DomainError::validation(
                "LanguageSkill.LanguageTooLong",
                format!(
                    "Language cannot exceed {} characters",
                    Self::MAX_LANGUAGE_LENGTH
                ),
            ));
        }
        if self
            .language_skills
            .iter()
            .any(|s| s.language().eq_ignore_ascii_case(trimmed))
        {
            return Err(DomainError::conflict(
                "Resume.DuplicateLanguageSkill",
                format!("Language '{}' is already listed", trimmed),
            ));
        }

        let entry = LanguageSkill::new(trimmed.to_string(), proficiency);
        let entry_id = entry.id();
        self.language_skills.push(entry);
        self.touch();
        Ok(entry_id)
    }

    /// Remove a language skill by identifier
    pub fn remove_language_skill(&mut self, language_skill_id: LanguageSkillId) -> DomainResult<()> {
        let before = self.language_skills.len();
        self.language_skills.retain(|s| s.id() != language_skill_id);
        if self.language_skills.len() == before {
            return Err(DomainError::not_found("LanguageSkill", language_skill_id));
        }
        self.touch();
        Ok(())
    }

    // ========================================================================
    // Status Transitions
    // ========================================================================

    /// Publish the resume so recruiters can find it
    pub fn publish(&mut self) -> DomainResult<Box<dyn DomainEvent>> {
        self.transition_to(ResumeStatus::Published)?;
        Ok(Box::new(ResumePublished::new(self.id.as_uuid())))
    }

    /// Withdraw the resume back to draft
    pub fn draft(&mut self) -> DomainResult<Box<dyn DomainEvent>> {
        self.transition_to(ResumeStatus::Draft)?;
        Ok(Box::new(ResumeDrafted::new(self.id.as_uuid())))
    }

    // ========================================================================
    // Getters
    // ========================================================================

    pub fn id(&self) -> ResumeId {
        self.id
    }

    pub fn seeker_id(&self) -> UserId {
        self.seeker_id
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn contact_info(&self) -> &ContactInfo {
        &self.contact_info
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn desired_position(&self) -> &DesiredPosition {
        &self.desired_position
    }

    pub fn salary_expectation(&self) -> &Money {
        &self.salary_expectation
    }

    pub fn skills_description(&self) -> &RichTextContent {
        &self.skills_description
    }

    pub fn employment_types(&self) -> &[EmploymentType] {
        &self.employment_types
    }

    pub fn work_arrangements(&self) -> &[WorkArrangement] {
        &self.work_arrangements
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn work_experience(&self) -> &[WorkExperience] {
        &self.work_experience
    }

    pub fn language_skills(&self) -> &[LanguageSkill] {
        &self.language_skills
    }

    pub fn status(&self) -> ResumeStatus {
        self.status
    }

    pub fn is_published(&self) -> bool {
        self.status == ResumeStatus::Published
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn concurrency_version(&self) -> u64 {
        self.concurrency_version
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    fn validate_entry_text(code_prefix: &str, value: &str, required: bool) -> DomainResult<()> {
        let trimmed = value.trim();
        if required && trimmed.is_empty() {
            return Err(DomainError::validation(
                format!("{}Required", code_prefix),
                format!("{} cannot be empty", code_prefix),
            ));
        }
        if trimmed.chars().count() > Self::MAX_ENTRY_TEXT_LENGTH {
            return Err(DomainError::validation(
                format!("{}TooLong", code_prefix),
                format!(
                    "{} cannot exceed {} characters",
                    code_prefix,
                    Self::MAX_ENTRY_TEXT_LENGTH
                ),
            ));
        }
        Ok(())
    }

    fn transition_to(&mut self, target: ResumeStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::conflict(
                "Resume.InvalidStatusTransition",
                format!("Cannot transition resume from {} to {}", self.status, target),
            ));
        }
        self.status = target;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.concurrency_version += 1;
    }
}
