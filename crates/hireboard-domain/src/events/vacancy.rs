//! Vacancy aggregate domain events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DomainEvent, EventMetadata};

/// Event emitted when a vacancy is created in draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VacancyCreated {
    pub metadata: EventMetadata,
    pub vacancy_id: Uuid,
    pub company_id: Uuid,
    pub title: String,
}

impl VacancyCreated {
    pub fn new(vacancy_id: Uuid, company_id: Uuid, title: String) -> Self {
        Self {
            metadata: EventMetadata::new(),
            vacancy_id,
            company_id,
            title,
        }
    }
}

impl DomainEvent for VacancyCreated {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.vacancy_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "VacancyCreated"
    }
}

/// Event emitted when a draft vacancy is submitted for registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VacancyRegistered {
    pub metadata: EventMetadata,
    pub vacancy_id: Uuid,
}

impl VacancyRegistered {
    pub fn new(vacancy_id: Uuid) -> Self {
        Self {
            metadata: EventMetadata::new(),
            vacancy_id,
        }
    }
}

impl DomainEvent for VacancyRegistered {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.vacancy_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "VacancyRegistered"
    }
}

/// Event emitted when a vacancy becomes visible to seekers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VacancyPublished {
    pub metadata: EventMetadata,
    pub vacancy_id: Uuid,
}

impl VacancyPublished {
    pub fn new(vacancy_id: Uuid) -> Self {
        Self {
            metadata: EventMetadata::new(),
            vacancy_id,
        }
    }
}

impl DomainEvent for VacancyPublished {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.vacancy_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "VacancyPublished"
    }
}

/// Event emitted when a published vacancy is taken off the board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VacancyArchived {
    pub metadata: EventMetadata,
    pub vacancy_id: Uuid,
}

impl VacancyArchived {
    pub fn new(vacancy_id: Uuid) -> Self {
        Self {
            metadata: EventMetadata::new(),
            vacancy_id,
        }
    }
}

impl DomainEvent for VacancyArchived {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.vacancy_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "VacancyArchived"
    }
}
