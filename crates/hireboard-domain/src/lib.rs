//! Recruitment platform domain layer
//!
//! Aggregates, value objects, domain events and service/repository contracts
//! for the hireboard platform. The crate is persistence- and
//! transport-agnostic: infrastructure crates implement the repository and
//! port traits defined here.
//!
//! Conventions:
//! - Construction goes through validating factories returning
//!   [`errors::DomainResult`]; `reconstitute` rebuilds from persisted state.
//! - State-changing operations return the emitted [`events::DomainEvent`]s
//!   instead of buffering them on the aggregate.

pub mod application;
pub mod company;
pub mod entity;
pub mod enumerations;
pub mod errors;
pub mod events;
pub mod ports;
pub mod repositories;
pub mod resume;
pub mod services;
pub mod user;
pub mod vacancy;
pub mod value_objects;

pub use application::{ApplicationMethod, VacancyApplication};
pub use company::{Company, CompanyUser};
pub use entity::Entity;
pub use enumerations::{
    EmploymentType, LanguageProficiency, ResumeStatus, UserRole, VacancyStatus, WorkArrangement,
};
pub use errors::{DomainError, DomainResult, ErrorKind};
pub use events::{DomainEvent, DomainEvents, EventHandler, EventMetadata};
pub use resume::Resume;
pub use services::{ApplicationService, RecruiterAssignmentService};
pub use user::{Account, RefreshToken, User};
pub use vacancy::{RecruiterInfo, Vacancy};
