//! Company aggregate root and the recruiter-to-company link
//!
//! Verification is a one-way transition; verifying twice is a reported
//! conflict. The one-company-per-recruiter rule is enforced by
//! `RecruiterAssignmentService`, not by the aggregates here.

mod company;
mod company_user;

pub use company::Company;
pub use company_user::CompanyUser;
