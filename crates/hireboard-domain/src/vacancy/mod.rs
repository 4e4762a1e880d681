//! Vacancy aggregate root
//!
//! A vacancy owns its invariants: field mutations require an editable
//! status, explicit transitions follow the Draft → Registered → Published ⇄
//! Archived machine, and every lifecycle change emits a domain event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enumerations::VacancyStatus;
use crate::errors::{DomainError, DomainResult};
use crate::events::vacancy::*;
use crate::events::DomainEvent;
use crate::value_objects::{CategoryId, CompanyId, Location, RichTextContent, Salary, UserId, VacancyId};

/// Recruiter posting the vacancy on behalf of a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterInfo {
    pub recruiter_id: UserId,
    pub company_id: CompanyId,
}

impl RecruiterInfo {
    pub fn new(recruiter_id: UserId, company_id: CompanyId) -> Self {
        Self {
            recruiter_id,
            company_id,
        }
    }
}

/// Vacancy aggregate root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vacancy {
    id: VacancyId,
    title: String,
    description: RichTextContent,
    salary: Salary,
    location: Location,
    recruiter: RecruiterInfo,
    category_id: CategoryId,
    status: VacancyStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    concurrency_version: u64,
}

impl Vacancy {
    pub const MAX_TITLE_LENGTH: usize = 200;

    /// Create a new vacancy in draft
    pub fn create(
        title: String,
        description: RichTextContent,
        salary: Salary,
        location: Location,
        recruiter: RecruiterInfo,
        category_id: CategoryId,
    ) -> DomainResult<(Self, Box<dyn DomainEvent>)> {
        Self::validate_title(&title)?;

        let id = VacancyId::new();
        let now = Utc::now();
        let vacancy = Self {
            id,
            title: title.clone(),
            description,
            salary,
            location,
            recruiter,
            category_id,
            status: VacancyStatus::Draft,
            created_at: now,
            updated_at: now,
            concurrency_version: 1,
        };

        let event = VacancyCreated::new(id.as_uuid(), recruiter.company_id.as_uuid(), title);
        Ok((vacancy, Box::new(event)))
    }

    /// Reconstitute a vacancy from persistence
    ///
    /// Bypasses validation since data was validated during original creation.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: VacancyId,
        title: String,
        description: RichTextContent,
        salary: Salary,
        location: Location,
        recruiter: RecruiterInfo,
        category_id: CategoryId,
        status: VacancyStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        concurrency_version: u64,
    ) -> Self {
        Self {
            id,
            title,
            description,
            salary,
            location,
            recruiter,
            category_id,
            status,
            created_at,
            updated_at,
            concurrency_version,
        }
    }

    // ========================================================================
    // Field Mutations (require editable status)
    // ========================================================================

    /// Update the vacancy title
    pub fn update_title(&mut self, title: String) -> DomainResult<()> {
        self.ensure_editable()?;
        Self::validate_title(&title)?;
        self.title = title;
        self.touch();
        Ok(())
    }

    /// Update the vacancy description
    pub fn update_description(&mut self, description: RichTextContent) -> DomainResult<()> {
        self.ensure_editable()?;
        self.description = description;
        self.touch();
        Ok(())
    }

    /// Update the offered salary
    pub fn update_salary(&mut self, salary: Salary) -> DomainResult<()> {
        self.ensure_editable()?;
        self.salary = salary;
        self.touch();
        Ok(())
    }

    /// Update the vacancy location
    pub fn update_location(&mut self, location: Location) -> DomainResult<()> {
        self.ensure_editable()?;
        self.location = location;
        self.touch();
        Ok(())
    }

    /// Move the vacancy to another category
    pub fn update_category(&mut self, category_id: CategoryId) -> DomainResult<()> {
        self.ensure_editable()?;
        self.category_id = category_id;
        self.touch();
        Ok(())
    }

    // ========================================================================
    // Status Transitions
    // ========================================================================

    /// Submit a draft vacancy for registration
    pub fn register(&mut self) -> DomainResult<Box<dyn DomainEvent>> {
        self.transition_to(VacancyStatus::Registered)?;
        Ok(Box::new(VacancyRegistered::new(self.id.as_uuid())))
    }

    /// Publish a registered or archived vacancy
    pub fn publish(&mut self) -> DomainResult<Box<dyn DomainEvent>> {
        self.transition_to(VacancyStatus::Published)?;
        Ok(Box::new(VacancyPublished::new(self.id.as_uuid())))
    }

    /// Archive a published vacancy
    pub fn archive(&mut self) -> DomainResult<Box<dyn DomainEvent>> {
        self.transition_to(VacancyStatus::Archived)?;
        Ok(Box::new(VacancyArchived::new(self.id.as_uuid())))
    }

    // ========================================================================
    // Getters
    // ========================================================================

    pub fn id(&self) -> VacancyId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &RichTextContent {
        &self.description
    }

    pub fn salary(&self) -> &Salary {
        &self.salary
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn recruiter(&self) -> RecruiterInfo {
        self.recruiter
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn status(&self) -> VacancyStatus {
        self.status
    }

    pub fn is_published(&self) -> bool {
        self.status == VacancyStatus::Published
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

    fn validate_title(title: &str) -> DomainResult<()> {
        if title.trim().is_empty() {
            return Err(DomainError::validation(
                "Vacancy.TitleRequired",
                "Vacancy title cannot be empty",
            ));
        }
        if title.chars().count() > Self::MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "Vacancy.TitleTooLong",
                format!(
                    "Vacancy title cannot exceed {} characters",
                    Self::MAX_TITLE_LENGTH
                ),
            ));
        }
        Ok(())
    }

    fn ensure_editable(&self) -> DomainResult<()> {
        if !self.status.is_editable() {
            return Err(DomainError::conflict(
                "Vacancy.NotEditable",
                format!("Vacancy cannot be edited in {} status", self.status),
            ));
        }
        Ok(())
    }

    fn transition_to(&mut self, target: VacancyStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::conflict(
                "Vacancy.InvalidStatusTransition",
                format!("Cannot transition vacancy from {} to {}", self.status, target),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::ports::PulldownParser;

    fn sample_vacancy() -> Vacancy {
        let description =
            RichTextContent::create("We are hiring a **Rust** engineer.", &PulldownParser).unwrap();
        let location =
            Location::create("Ukraine", "Kyiv", None, None, None, None, None).unwrap();
        let recruiter = RecruiterInfo::new(UserId::new(), CompanyId::new());
        let (vacancy, _) = Vacancy::create(
            "Senior Rust Engineer".to_string(),
            description,
            Salary::none(),
            location,
            recruiter,
            CategoryId::new(),
        )
        .unwrap();
        vacancy
    }

    #[test]
    fn test_create_starts_in_draft() {
        let description = RichTextContent::create("desc", &PulldownParser).unwrap();
        let location = Location::create("Ukraine", "Kyiv", None, None, None, None, None).unwrap();
        let (vacancy, event) = Vacancy::create(
            "Engineer".to_string(),
            description,
            Salary::none(),
            location,
            RecruiterInfo::new(UserId::new(), CompanyId::new()),
            CategoryId::new(),
        )
        .unwrap();

        assert_eq!(vacancy.status(), VacancyStatus::Draft);
        assert_eq!(event.event_type(), "VacancyCreated");
        assert_eq!(event.aggregate_id(), vacancy.id().as_uuid());
    }

    #[test]
    fn test_create_empty_title_rejected() {
        let description = RichTextContent::create("desc", &PulldownParser).unwrap();
        let location = Location::create("Ukraine", "Kyiv", None, None, None, None, None).unwrap();
        let result = Vacancy::create(
            "  ".to_string(),
            description,
            Salary::none(),
            location,
            RecruiterInfo::new(UserId::new(), CompanyId::new()),
            CategoryId::new(),
        );
        assert_eq!(result.unwrap_err().code(), "Vacancy.TitleRequired");
    }

    #[test]
    fn test_title_length_counted_in_characters() {
        let mut vacancy = sample_vacancy();

        // Cyrillic takes two bytes per character; the limit is on characters
        vacancy
            .update_title("ї".repeat(Vacancy::MAX_TITLE_LENGTH))
            .unwrap();

        let err = vacancy
            .update_title("ї".repeat(Vacancy::MAX_TITLE_LENGTH + 1))
            .unwrap_err();
        assert_eq!(err.code(), "Vacancy.TitleTooLong");
    }

    #[test]
    fn test_update_title_in_draft() {
        let mut vacancy = sample_vacancy();
        vacancy.update_title("Staff Rust Engineer".to_string()).unwrap();
        assert_eq!(vacancy.title(), "Staff Rust Engineer");
    }

    #[test]
    fn test_update_title_in_registered_rejected() {
        let mut vacancy = sample_vacancy();
        vacancy.register().unwrap();

        let err = vacancy
            .update_title("New title".to_string())
            .unwrap_err();
        assert_eq!(err.code(), "Vacancy.NotEditable");
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(vacancy.title(), "Senior Rust Engineer");
    }

    #[test]
    fn test_update_title_in_published() {
        let mut vacancy = sample_vacancy();
        vacancy.register().unwrap();
        vacancy.publish().unwrap();

        assert!(vacancy.update_title("Updated".to_string()).is_ok());
    }

    #[test]
    fn test_update_title_in_archived_rejected() {
        let mut vacancy = sample_vacancy();
        vacancy.register().unwrap();
        vacancy.publish().unwrap();
        vacancy.archive().unwrap();

        let err = vacancy.update_title("Updated".to_string()).unwrap_err();
        assert_eq!(err.code(), "Vacancy.NotEditable");
    }

    #[test]
    fn test_full_lifecycle() {
        let mut vacancy = sample_vacancy();

        let event = vacancy.register().unwrap();
        assert_eq!(event.event_type(), "VacancyRegistered");
        assert_eq!(vacancy.status(), VacancyStatus::Registered);

        let event = vacancy.publish().unwrap();
        assert_eq!(event.event_type(), "VacancyPublished");
        assert!(vacancy.is_published());

        let event = vacancy.archive().unwrap();
        assert_eq!(event.event_type(), "VacancyArchived");
        assert_eq!(vacancy.status(), VacancyStatus::Archived);

        // Archived vacancies can be published again
        vacancy.publish().unwrap();
        assert!(vacancy.is_published());
    }

    #[test]
    fn test_illegal_transition_rejected() {
        let mut vacancy = sample_vacancy();
        let err = vacancy.publish().unwrap_err();
        assert_eq!(err.code(), "Vacancy.InvalidStatusTransition");
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(vacancy.status(), VacancyStatus::Draft);
    }

    #[test]
    fn test_failed_mutation_leaves_state_unchanged() {
        let mut vacancy = sample_vacancy();
        let version = vacancy.concurrency_version();
        let _ = vacancy.update_title("a".repeat(201));
        assert_eq!(vacancy.title(), "Senior Rust Engineer");
        assert_eq!(vacancy.concurrency_version(), version);
    }
}
