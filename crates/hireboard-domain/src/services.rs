//! Domain services - stateless business logic that spans aggregates
//!
//! Services hold repository trait objects and coordinate rules no single
//! aggregate can enforce, such as platform-wide uniqueness.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::VacancyApplication;
use crate::company::CompanyUser;
use crate::enumerations::UserRole;
use crate::errors::{DomainError, DomainResult};
use crate::events::DomainEvent;
use crate::repositories::{
    ApplicationRepository, CompanyRepository, CompanyUserRepository, ResumeRepository,
    UserRepository, VacancyRepository,
};
use crate::value_objects::{CompanyId, CoverLetter, FileUrl, ResumeId, UserId, VacancyId};

/// Enforces the one-company-per-recruiter rule
pub struct RecruiterAssignmentService {
    users: Arc<dyn UserRepository>,
    companies: Arc<dyn CompanyRepository>,
    company_users: Arc<dyn CompanyUserRepository>,
}

impl RecruiterAssignmentService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        companies: Arc<dyn CompanyRepository>,
        company_users: Arc<dyn CompanyUserRepository>,
    ) -> Self {
        Self {
            users,
            companies,
            company_users,
        }
    }

    /// Link a recruiter to a company
    ///
    /// The recruiter must exist with the Recruiter role, the company must
    /// exist, and the recruiter must not already be linked anywhere.
    pub async fn assign(
        &self,
        recruiter_id: UserId,
        company_id: CompanyId,
    ) -> DomainResult<(CompanyUser, Box<dyn DomainEvent>)> {
        debug!(%recruiter_id, %company_id, "assigning recruiter to company");

        let user = self
            .users
            .find_by_id(&recruiter_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", recruiter_id))?;
        if user.role() != UserRole::Recruiter {
            return Err(DomainError::problem(
                "CompanyUser.NotARecruiter",
                "Only users with the Recruiter role can be assigned to a company",
            ));
        }

        if !self.companies.exists(&company_id).await? {
            return Err(DomainError::not_found("Company", company_id));
        }

        if let Some(existing) = self.company_users.find_by_recruiter(&recruiter_id).await? {
            return Err(DomainError::conflict(
                "CompanyUser.AlreadyAssigned",
                format!(
                    "Recruiter {} is already assigned to company {}",
                    recruiter_id,
                    existing.company_id()
                ),
            ));
        }

        let (link, event) = CompanyUser::create(recruiter_id, company_id)?;
        self.company_users.save(&link).await?;
        info!(%recruiter_id, %company_id, "recruiter assigned");
        Ok((link, event))
    }
}

/// Handles submissions of applications to vacancies
pub struct ApplicationService {
    vacancies: Arc<dyn VacancyRepository>,
    resumes: Arc<dyn ResumeRepository>,
    applications: Arc<dyn ApplicationRepository>,
}

impl ApplicationService {
    pub fn new(
        vacancies: Arc<dyn VacancyRepository>,
        resumes: Arc<dyn ResumeRepository>,
        applications: Arc<dyn ApplicationRepository>,
    ) -> Self {
        Self {
            vacancies,
            resumes,
            applications,
        }
    }

    /// Apply to a vacancy with a platform resume
    ///
    /// The resume must be published and owned by the applying seeker.
    pub async fn apply_with_resume(
        &self,
        seeker_id: UserId,
        vacancy_id: VacancyId,
        resume_id: ResumeId,
        cover_letter: CoverLetter,
    ) -> DomainResult<(VacancyApplication, Box<dyn DomainEvent>)> {
        debug!(%seeker_id, %vacancy_id, %resume_id, "applying with resume");
        self.check_vacancy_open(&vacancy_id).await?;

        let resume = self
            .resumes
            .find_by_id(&resume_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Resume", resume_id))?;
        if resume.seeker_id() != seeker_id {
            return Err(DomainError::problem(
                "Application.ResumeNotOwned",
                "Resume does not belong to the applying seeker",
            ));
        }
        if !resume.is_published() {
            return Err(DomainError::problem(
                "Application.ResumeNotPublished",
                "Only published resumes can back an application",
            ));
        }

        self.check_not_duplicate(&seeker_id, &vacancy_id).await?;

        let (application, event) =
            VacancyApplication::create_with_resume(seeker_id, vacancy_id, resume_id, cover_letter)?;
        self.applications.save(&application).await?;
        info!(application_id = %application.id(), %vacancy_id, "application submitted");
        Ok((application, event))
    }

    /// Apply to a vacancy with an uploaded file
    pub async fn apply_with_file(
        &self,
        seeker_id: UserId,
        vacancy_id: VacancyId,
        file_url: FileUrl,
        cover_letter: CoverLetter,
    ) -> DomainResult<(VacancyApplication, Box<dyn DomainEvent>)> {
        debug!(%seeker_id, %vacancy_id, "applying with file");
        self.check_vacancy_open(&vacancy_id).await?;
        self.check_not_duplicate(&seeker_id, &vacancy_id).await?;

        let (application, event) =
            VacancyApplication::create_with_file(seeker_id, vacancy_id, file_url, cover_letter)?;
        self.applications.save(&application).await?;
        info!(application_id = %application.id(), %vacancy_id, "application submitted");
        Ok((application, event))
    }

    async fn check_vacancy_open(&self, vacancy_id: &VacancyId) -> DomainResult<()> {
        let vacancy = self
            .vacancies
            .find_by_id(vacancy_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Vacancy", *vacancy_id))?;
        if !vacancy.is_published() {
            return Err(DomainError::conflict(
                "Vacancy.NotPublished",
                "Applications are accepted only for published vacancies",
            ));
        }
        Ok(())
    }

    async fn check_not_duplicate(
        &self,
        seeker_id: &UserId,
        vacancy_id: &VacancyId,
    ) -> DomainResult<()> {
        if self
            .applications
            .exists_for_seeker_and_vacancy(seeker_id, vacancy_id)
            .await?
        {
            return Err(DomainError::conflict(
                "Application.Duplicate",
                "Seeker has already applied to this vacancy",
            ));
        }
        Ok(())
    }
}
