//! Resume aggregate domain events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DomainEvent, EventMetadata};

/// Event emitted when a resume is created in draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeCreated {
    pub metadata: EventMetadata,
    pub resume_id: Uuid,
    pub seeker_id: Uuid,
}

impl ResumeCreated {
    pub fn new(resume_id: Uuid, seeker_id: Uuid) -> Self {
        Self {
            metadata: EventMetadata::new(),
            resume_id,
            seeker_id,
        }
    }
}

impl DomainEvent for ResumeCreated {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.resume_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "ResumeCreated"
    }
}

/// Event emitted when a resume becomes visible to recruiters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumePublished {
    pub metadata: EventMetadata,
    pub resume_id: Uuid,
}

impl ResumePublished {
    pub fn new(resume_id: Uuid) -> Self {
        Self {
            metadata: EventMetadata::new(),
            resume_id,
        }
    }
}

impl DomainEvent for ResumePublished {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.resume_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "ResumePublished"
    }
}

/// Event emitted when a published resume is withdrawn back to draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeDrafted {
    pub metadata: EventMetadata,
    pub resume_id: Uuid,
}

impl ResumeDrafted {
    pub fn new(resume_id: Uuid) -> Self {
        Self {
            metadata: EventMetadata::new(),
            resume_id,
        }
    }
}

impl DomainEvent for ResumeDrafted {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.resume_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "ResumeDrafted"
    }
}
