//! Company aggregate domain events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DomainEvent, EventMetadata};

/// Event emitted when a company is registered on the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyCreated {
    pub metadata: EventMetadata,
    pub company_id: Uuid,
    pub name: String,
}

impl CompanyCreated {
    pub fn new(company_id: Uuid, name: String) -> Self {
        Self {
            metadata: EventMetadata::new(),
            company_id,
            name,
        }
    }
}

impl DomainEvent for CompanyCreated {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.company_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "CompanyCreated"
    }
}

/// Event emitted when a company passes verification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyVerified {
    pub metadata: EventMetadata,
    pub company_id: Uuid,
}

impl CompanyVerified {
    pub fn new(company_id: Uuid) -> Self {
        Self {
            metadata: EventMetadata::new(),
            company_id,
        }
    }
}

impl DomainEvent for CompanyVerified {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.company_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "CompanyVerified"
    }
}

/// Event emitted when a recruiter is linked to a company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecruiterAssigned {
    pub metadata: EventMetadata,
    pub company_user_id: Uuid,
    pub recruiter_id: Uuid,
    pub company_id: Uuid,
}

impl RecruiterAssigned {
    pub fn new(company_user_id: Uuid, recruiter_id: Uuid, company_id: Uuid) -> Self {
        Self {
            metadata: EventMetadata::new(),
            company_user_id,
            recruiter_id,
            company_id,
        }
    }
}

impl DomainEvent for RecruiterAssigned {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.company_user_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "RecruiterAssigned"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_verified_event() {
        let company_id = Uuid::new_v4();
        let event = CompanyVerified::new(company_id);
        assert_eq!(event.aggregate_id(), company_id);
        assert_eq!(event.event_type(), "CompanyVerified");
    }
}
