//! Recruiter-to-company link

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::events::company::RecruiterAssigned;
use crate::events::DomainEvent;
use crate::value_objects::{CompanyId, CompanyUserId, UserId};

/// Links a recruiter to exactly one company
///
/// Uniqueness across the platform (one company per recruiter) is checked by
/// `RecruiterAssignmentService` before construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyUser {
    id: CompanyUserId,
    recruiter_id: UserId,
    company_id: CompanyId,
    created_at: DateTime<Utc>,
}

impl CompanyUser {
    /// Create a new link
    pub fn create(
        recruiter_id: UserId,
        company_id: CompanyId,
    ) -> DomainResult<(Self, Box<dyn DomainEvent>)> {
        if recruiter_id.as_uuid().is_nil() || company_id.as_uuid().is_nil() {
            return Err(DomainError::validation(
                "CompanyUser.EmptyIdentifier",
                "Recruiter and company identifiers are required",
            ));
        }

        let id = CompanyUserId::new();
        let link = Self {
            id,
            recruiter_id,
            company_id,
            created_at: Utc::now(),
        };

        let event = RecruiterAssigned::new(
            id.as_uuid(),
            recruiter_id.as_uuid(),
            company_id.as_uuid(),
        );
        Ok((link, Box::new(event)))
    }

    /// Reconstitute a link from persistence
    pub fn reconstitute(
        id: CompanyUserId,
        recruiter_id: UserId,
        company_id: CompanyId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            recruiter_id,
            company_id,
            created_at,
        }
    }

    pub fn id(&self) -> CompanyUserId {
        self.id
    }

    pub fn recruiter_id(&self) -> UserId {
        self.recruiter_id
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_link() {
        let recruiter_id = UserId::new();
        let company_id = CompanyId::new();
        let (link, event) = CompanyUser::create(recruiter_id, company_id).unwrap();

        assert_eq!(link.recruiter_id(), recruiter_id);
        assert_eq!(link.company_id(), company_id);
        assert_eq!(event.event_type(), "RecruiterAssigned");
    }

    #[test]
    fn test_nil_identifier_rejected() {
        let nil = UserId::from_string("00000000-0000-0000-0000-000000000000").unwrap();
        let err = CompanyUser::create(nil, CompanyId::new()).unwrap_err();
        assert_eq!(err.code(), "CompanyUser.EmptyIdentifier");
    }
}
