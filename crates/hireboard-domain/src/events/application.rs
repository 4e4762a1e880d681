//! Vacancy application domain events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DomainEvent, EventMetadata};

/// How the candidate backed their application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationKind {
    Resume,
    File,
}

/// Event emitted when a seeker applies to a vacancy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationCreated {
    pub metadata: EventMetadata,
    pub application_id: Uuid,
    pub vacancy_id: Uuid,
    pub seeker_id: Uuid,
    pub kind: ApplicationKind,
}

impl ApplicationCreated {
    pub fn new(
        application_id: Uuid,
        vacancy_id: Uuid,
        seeker_id: Uuid,
        kind: ApplicationKind,
    ) -> Self {
        Self {
            metadata: EventMetadata::new(),
            application_id,
            vacancy_id,
            seeker_id,
            kind,
        }
    }
}

impl DomainEvent for ApplicationCreated {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.application_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "ApplicationCreated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_created_event() {
        let application_id = Uuid::new_v4();
        let event = ApplicationCreated::new(
            application_id,
            Uuid::new_v4(),
            Uuid::new_v4(),
            ApplicationKind::Resume,
        );
        assert_eq!(event.aggregate_id(), application_id);
        assert_eq!(event.kind, ApplicationKind::Resume);
        assert_eq!(event.event_type(), "ApplicationCreated");
    }
}
