//! Value objects representing immutable domain concepts
//!
//! All value objects are structurally equal and constructed only through
//! validating factories that return `DomainResult` instead of panicking.

mod cover_letter;
mod date_range;
mod email;
mod ids;
mod location;
mod money;
mod personal;
mod phone;
mod rich_text;
mod url;

pub use cover_letter::{CoverLetter, DesiredPosition};
pub use date_range::DateRange;
pub use email::Email;
pub use ids::{
    ApplicationId, CategoryId, CompanyId, CompanyUserId, EducationId, LanguageSkillId,
    RefreshTokenId, ResumeId, UserId, VacancyId, WorkExperienceId,
};
pub use location::Location;
pub use money::{Money, Salary};
pub use personal::{ContactInfo, PersonalInfo};
pub use phone::PhoneNumber;
pub use rich_text::RichTextContent;
pub use url::{FileUrl, LogoUrl, WebsiteUrl};
