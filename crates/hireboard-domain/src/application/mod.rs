//! Vacancy application aggregate root
//!
//! An application is either backed by a platform resume or by an uploaded
//! file; the two variants share identity, cover letter and validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::events::application::{ApplicationCreated, ApplicationKind};
use crate::events::DomainEvent;
use crate::value_objects::{ApplicationId, CoverLetter, FileUrl, ResumeId, UserId, VacancyId};

/// What backs the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApplicationMethod {
    /// Backed by a resume hosted on the platform
    Resume { resume_id: ResumeId },
    /// Backed by an uploaded file
    File { file_url: FileUrl },
}

impl ApplicationMethod {
    pub fn kind(&self) -> ApplicationKind {
        match self {
            ApplicationMethod::Resume { .. } => ApplicationKind::Resume,
            ApplicationMethod::File { .. } => ApplicationKind::File,
        }
    }
}

/// Vacancy application aggregate root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyApplication {
    id: ApplicationId,
    seeker_id: UserId,
    vacancy_id: VacancyId,
    cover_letter: CoverLetter,
    method: ApplicationMethod,
    created_at: DateTime<Utc>,
}

impl VacancyApplication {
    /// Apply with a platform resume
    pub fn create_with_resume(
        seeker_id: UserId,
        vacancy_id: VacancyId,
        resume_id: ResumeId,
        cover_letter: CoverLetter,
    ) -> DomainResult<(Self, Box<dyn DomainEvent>)> {
        if resume_id.as_uuid().is_nil() {
            return Err(DomainError::validation(
                "Application.EmptyResumeId",
                "Resume identifier is required",
            ));
        }
        Self::create(
            seeker_id,
            vacancy_id,
            cover_letter,
            ApplicationMethod::Resume { resume_id },
        )
    }

    /// Apply with an uploaded file
    pub fn create_with_file(
        seeker_id: UserId,
        vacancy_id: VacancyId,
        file_url: FileUrl,
        cover_letter: CoverLetter,
    ) -> DomainResult<(Self, Box<dyn DomainEvent>)> {
        Self::create(
            seeker_id,
            vacancy_id,
            cover_letter,
            ApplicationMethod::File { file_url },
        )
    }

    fn create(
        seeker_id: UserId,
        vacancy_id: VacancyId,
        cover_letter: CoverLetter,
        method: ApplicationMethod,
    ) -> DomainResult<(Self, Box<dyn DomainEvent>)> {
        if seeker_id.as_uuid().is_nil() || vacancy_id.as_uuid().is_nil() {
            return Err(DomainError::validation(
                "Application.EmptyIdentifier",
                "Seeker and vacancy identifiers are required",
            ));
        }

        let id = ApplicationId::new();
        let kind = method.kind();
        let application = Self {
            id,
            seeker_id,
            vacancy_id,
            cover_letter,
            method,
            created_at: Utc::now(),
        };

        let event =
            ApplicationCreated::new(id.as_uuid(), vacancy_id.as_uuid(), seeker_id.as_uuid(), kind);
        Ok((application, Box::new(event)))
    }

    /// Reconstitute an application from persistence
    pub fn reconstitute(
        id: ApplicationId,
        seeker_id: UserId,
        vacancy_id: VacancyId,
        cover_letter: CoverLetter,
        method: ApplicationMethod,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            seeker_id,
            vacancy_id,
            cover_letter,
            method,
            created_at,
        }
    }

    pub fn id(&self) -> ApplicationId {
        self.id
    }

    pub fn seeker_id(&self) -> UserId {
        self.seeker_id
    }

    pub fn vacancy_id(&self) -> VacancyId {
        self.vacancy_id
    }

    pub fn cover_letter(&self) -> &CoverLetter {
        &self.cover_letter
    }

    pub fn method(&self) -> &ApplicationMethod {
        &self.method
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_backed_application() {
        let resume_id = ResumeId::new();
        let (application, event) = VacancyApplication::create_with_resume(
            UserId::new(),
            VacancyId::new(),
            resume_id,
            CoverLetter::create("Hello!").unwrap(),
        )
        .unwrap();

        assert_eq!(
            application.method(),
            &ApplicationMethod::Resume { resume_id }
        );
        assert_eq!(event.event_type(), "ApplicationCreated");
    }

    #[test]
    fn test_file_backed_application() {
        let file_url = FileUrl::create("https://files.example/cv.pdf").unwrap();
        let (application, _) = VacancyApplication::create_with_file(
            UserId::new(),
            VacancyId::new(),
            file_url.clone(),
            CoverLetter::create("").unwrap(),
        )
        .unwrap();

        assert_eq!(application.method(), &ApplicationMethod::File { file_url });
        assert!(application.cover_letter().is_empty());
    }

    #[test]
    fn test_nil_seeker_rejected() {
        let nil = UserId::from_string("00000000-0000-0000-0000-000000000000").unwrap();
        let err = VacancyApplication::create_with_resume(
            nil,
            VacancyId::new(),
            ResumeId::new(),
            CoverLetter::create("").unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "Application.EmptyIdentifier");
    }

    #[test]
    fn test_nil_resume_rejected() {
        let nil = ResumeId::from_string("00000000-0000-0000-0000-000000000000").unwrap();
        let err = VacancyApplication::create_with_resume(
            UserId::new(),
            VacancyId::new(),
            nil,
            CoverLetter::create("").unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "Application.EmptyResumeId");
    }
}
