//! Identity-based entity abstraction

/// Anything addressed by a typed identifier
///
/// Entity equality is by identifier; structural equality belongs to value
/// objects.
pub trait Entity {
    type Id;

    fn id(&self) -> Self::Id;
}

macro_rules! impl_entity {
    ($entity:ty, $id:ty) => {
        impl Entity for $entity {
            type Id = $id;

            fn id(&self) -> Self::Id {
                self.id()
            }
        }
    };
}

use crate::application::VacancyApplication;
use crate::company::{Company, CompanyUser};
use crate::resume::Resume;
use crate::user::{RefreshToken, User};
use crate::vacancy::Vacancy;
use crate::value_objects::{
    ApplicationId, CompanyId, CompanyUserId, RefreshTokenId, ResumeId, UserId, VacancyId,
};

impl_entity!(Vacancy, VacancyId);
impl_entity!(Resume, ResumeId);
impl_entity!(Company, CompanyId);
impl_entity!(CompanyUser, CompanyUserId);
impl_entity!(User, UserId);
impl_entity!(VacancyApplication, ApplicationId);
impl_entity!(RefreshToken, RefreshTokenId);
