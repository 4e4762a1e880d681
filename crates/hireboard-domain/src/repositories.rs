//! Repository interfaces for data persistence
//!
//! These traits define the contracts for data access. Implementations are
//! provided by infrastructure crates; the domain layer defines only the
//! interfaces.

use async_trait::async_trait;

use crate::application::VacancyApplication;
use crate::company::{Company, CompanyUser};
use crate::errors::DomainResult;
use crate::resume::Resume;
use crate::user::{RefreshToken, User};
use crate::vacancy::Vacancy;
use crate::value_objects::{
    ApplicationId, CompanyId, CompanyUserId, RefreshTokenId, ResumeId, UserId, VacancyId,
};

/// Repository for vacancy aggregates
#[async_trait]
pub trait VacancyRepository: Send + Sync {
    /// Save a vacancy
    async fn save(&self, vacancy: &Vacancy) -> DomainResult<()>;

    /// Find vacancy by ID
    async fn find_by_id(&self, id: &VacancyId) -> DomainResult<Option<Vacancy>>;

    /// Find vacancies belonging to a company
    async fn find_by_company(&self, company_id: &CompanyId) -> DomainResult<Vec<Vacancy>>;

    /// Delete vacancy by ID
    async fn delete(&self, id: &VacancyId) -> DomainResult<()>;

    /// Check if vacancy exists
    async fn exists(&self, id: &VacancyId) -> DomainResult<bool>;
}

/// Repository for resume aggregates
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Save a resume
    async fn save(&self, resume: &Resume) -> DomainResult<()>;

    /// Find resume by ID
    async fn find_by_id(&self, id: &ResumeId) -> DomainResult<Option<Resume>>;

    /// Find resumes belonging to a seeker
    async fn find_by_seeker(&self, seeker_id: &UserId) -> DomainResult<Vec<Resume>>;

    /// Delete resume by ID
    async fn delete(&self, id: &ResumeId) -> DomainResult<()>;

    /// Check if resume exists
    async fn exists(&self, id: &ResumeId) -> DomainResult<bool>;
}

/// Repository for company aggregates
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Save a company
    async fn save(&self, company: &Company) -> DomainResult<()>;

    /// Find company by ID
    async fn find_by_id(&self, id: &CompanyId) -> DomainResult<Option<Company>>;

    /// Delete company by ID
    async fn delete(&self, id: &CompanyId) -> DomainResult<()>;

    /// Check if company exists
    async fn exists(&self, id: &CompanyId) -> DomainResult<bool>;
}

/// Repository for recruiter-to-company links
#[async_trait]
pub trait CompanyUserRepository: Send + Sync {
    /// Save a link
    async fn save(&self, company_user: &CompanyUser) -> DomainResult<()>;

    /// Find link by ID
    async fn find_by_id(&self, id: &CompanyUserId) -> DomainResult<Option<CompanyUser>>;

    /// Find the link for a recruiter, if any
    async fn find_by_recruiter(&self, recruiter_id: &UserId) -> DomainResult<Option<CompanyUser>>;

    /// Delete link by ID
    async fn delete(&self, id: &CompanyUserId) -> DomainResult<()>;
}

/// Repository for user aggregates
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a user
    async fn save(&self, user: &User) -> DomainResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Delete user by ID
    async fn delete(&self, id: &UserId) -> DomainResult<()>;

    /// Check if user exists
    async fn exists(&self, id: &UserId) -> DomainResult<bool>;
}

/// Repository for vacancy applications
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Save an application
    async fn save(&self, application: &VacancyApplication) -> DomainResult<()>;

    /// Find application by ID
    async fn find_by_id(&self, id: &ApplicationId) -> DomainResult<Option<VacancyApplication>>;

    /// Find applications submitted to a vacancy
    async fn find_by_vacancy(&self, vacancy_id: &VacancyId) -> DomainResult<Vec<VacancyApplication>>;

    /// Check whether a seeker has already applied to a vacancy
    async fn exists_for_seeker_and_vacancy(
        &self,
        seeker_id: &UserId,
        vacancy_id: &VacancyId,
    ) -> DomainResult<bool>;

    /// Delete application by ID
    async fn delete(&self, id: &ApplicationId) -> DomainResult<()>;
}

/// Repository for refresh tokens
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Save a token
    async fn save(&self, token: &RefreshToken) -> DomainResult<()>;

    /// Find token by ID
    async fn find_by_id(&self, id: &RefreshTokenId) -> DomainResult<Option<RefreshToken>>;

    /// Find token by its opaque value
    async fn find_by_token(&self, token: &str) -> DomainResult<Option<RefreshToken>>;

    /// Delete token by ID
    async fn delete(&self, id: &RefreshTokenId) -> DomainResult<()>;
}

/// Unit of work pattern for transactional operations
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Commit pending changes
    async fn commit(&self) -> DomainResult<()>;

    /// Discard pending changes
    async fn rollback(&self) -> DomainResult<()>;
}
