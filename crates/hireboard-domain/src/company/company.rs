//! Company aggregate root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::events::company::*;
use crate::events::DomainEvent;
use crate::value_objects::{CompanyId, LogoUrl, RichTextContent, WebsiteUrl};

/// Company aggregate root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
    description: RichTextContent,
    website: WebsiteUrl,
    logo: LogoUrl,
    size: Option<u32>,
    is_verified: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    concurrency_version: u64,
}

impl Company {
    pub const MAX_NAME_LENGTH: usize = 200;

    /// Create a new, unverified company
    pub fn create(
        name: String,
        description: RichTextContent,
        website: WebsiteUrl,
        logo: LogoUrl,
        size: Option<u32>,
    ) -> DomainResult<(Self, Box<dyn DomainEvent>)> {
        Self::validate_name(&name)?;
        Self::validate_size(size)?;

        let id = CompanyId::new();
        let now = Utc::now();
        let company = Self {
            id,
            name: name.clone(),
            description,
            website,
            logo,
            size,
            is_verified: false,
            created_at: now,
            updated_at: now,
            concurrency_version: 1,
        };

        let event = CompanyCreated::new(id.as_uuid(), name);
        Ok((company, Box::new(event)))
    }

    /// Reconstitute a company from persistence
    ///
    /// Bypasses validation since data was validated during original creation.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CompanyId,
        name: String,
        description: RichTextContent,
        website: WebsiteUrl,
        logo: LogoUrl,
        size: Option<u32>,
        is_verified: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        concurrency_version: u64,
    ) -> Self {
        Self {
            id,
            name,
            description,
            website,
            logo,
            size,
            is_verified,
            created_at,
            updated_at,
            concurrency_version,
        }
    }

    /// Rename the company
    pub fn update_name(&mut self, name: String) -> DomainResult<()> {
        Self::validate_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Update the company description
    pub fn update_description(&mut self, description: RichTextContent) {
        self.description = description;
        self.touch();
    }

    /// Update the website URL (pass the `none` sentinel to clear it)
    pub fn update_website(&mut self, website: WebsiteUrl) {
        self.website = website;
        self.touch();
    }

    /// Update the logo URL (pass the `none` sentinel to clear it)
    pub fn update_logo(&mut self, logo: LogoUrl) {
        self.logo = logo;
        self.touch();
    }

    /// Update the headcount; zero is rejected
    pub fn update_size(&mut self, size: Option<u32>) -> DomainResult<()> {
        Self::validate_size(size)?;
        self.size = size;
        self.touch();
        Ok(())
    }

    /// Mark the company as verified
    ///
    /// One-way transition; verifying an already verified company is a
    /// conflict, not a no-op.
    pub fn verify(&mut self) -> DomainResult<Box<dyn DomainEvent>> {
        if self.is_verified {
            return Err(DomainError::conflict(
                "Company.AlreadyVerified",
                "Company is already verified",
            ));
        }
        self.is_verified = true;
        self.touch();
        Ok(Box::new(CompanyVerified::new(self.id.as_uuid())))
    }

    pub fn id(&self) -> CompanyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &RichTextContent {
        &self.description
    }

    pub fn website(&self) -> &WebsiteUrl {
        &self.website
    }

    pub fn logo(&self) -> &LogoUrl {
        &self.logo
    }

    pub fn size(&self) -> Option<u32> {
        self.size
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
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

    fn validate_name(name: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                "Company.NameRequired",
                "Company name cannot be empty",
            ));
        }
        if name.chars().count() > Self::MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "Company.NameTooLong",
                format!(
                    "Company name cannot exceed {} characters",
                    Self::MAX_NAME_LENGTH
                ),
            ));
        }
        Ok(())
    }

    fn validate_size(size: Option<u32>) -> DomainResult<()> {
        if size == Some(0) {
            return Err(DomainError::validation(
                "Company.InvalidSize",
                "Company size must be a positive number",
            ));
        }
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

    fn sample_company() -> Company {
        let description = RichTextContent::create("We make things.", &PulldownParser).unwrap();
        let (company, _) = Company::create(
            "Acme".to_string(),
            description,
            WebsiteUrl::none(),
            LogoUrl::none(),
            None,
        )
        .unwrap();
        company
    }

    #[test]
    fn test_create_company() {
        let company = sample_company();
        assert_eq!(company.name(), "Acme");
        assert!(!company.is_verified());
        assert!(company.website().is_none());
        assert_eq!(company.size(), None);
    }

    #[test]
    fn test_empty_name_rejected() {
        let description = RichTextContent::create("", &PulldownParser).unwrap();
        let result = Company::create(
            "".to_string(),
            description,
            WebsiteUrl::none(),
            LogoUrl::none(),
            None,
        );
        assert_eq!(result.unwrap_err().code(), "Company.NameRequired");
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut company = sample_company();
        let err = company.update_size(Some(0)).unwrap_err();
        assert_eq!(err.code(), "Company.InvalidSize");
        assert_eq!(company.size(), None);
    }

    #[test]
    fn test_update_size() {
        let mut company = sample_company();
        company.update_size(Some(250)).unwrap();
        assert_eq!(company.size(), Some(250));
    }

    #[test]
    fn test_verify_once_succeeds() {
        let mut company = sample_company();
        let event = company.verify().unwrap();
        assert!(company.is_verified());
        assert_eq!(event.event_type(), "CompanyVerified");
    }

    #[test]
    fn test_verify_twice_is_conflict() {
        let mut company = sample_company();
        company.verify().unwrap();
        let version = company.concurrency_version();

        let err = company.verify().unwrap_err();
        assert_eq!(err.code(), "Company.AlreadyVerified");
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(company.is_verified());
        assert_eq!(company.concurrency_version(), version);
    }

    #[test]
    fn test_update_website() {
        let mut company = sample_company();
        company.update_website(WebsiteUrl::create("https://acme.example").unwrap());
        assert_eq!(company.website().as_str(), Some("https://acme.example/"));
    }
}
