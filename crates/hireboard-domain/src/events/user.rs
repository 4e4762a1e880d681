//! User aggregate domain events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DomainEvent, EventMetadata};

/// Event emitted when a user registers on the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRegistered {
    pub metadata: EventMetadata,
    pub user_id: Uuid,
    pub email: String,
}

impl UserRegistered {
    pub fn new(user_id: Uuid, email: String) -> Self {
        Self {
            metadata: EventMetadata::new(),
            user_id,
            email,
        }
    }
}

impl DomainEvent for UserRegistered {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.user_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }

    fn event_type(&self) -> &str {
        "UserRegistered"
    }
}
