//! Domain events
//!
//! Events are pure data records emitted by aggregate operations for other
//! contexts to react to. Aggregates return them alongside their results;
//! dispatch is the responsibility of an external collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod application;
pub mod company;
pub mod resume;
pub mod user;
pub mod vacancy;

pub use application::*;
pub use company::*;
pub use resume::*;
pub use user::*;
pub use vacancy::*;

/// Something that happened to an aggregate
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Unique identifier of this event occurrence
    fn event_id(&self) -> Uuid;

    /// Identifier of the aggregate the event belongs to
    fn aggregate_id(&self) -> Uuid;

    /// When the event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Stable event type name
    fn event_type(&self) -> &str;
}

/// Identity and timestamp shared by every event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer contract for dispatched events
///
/// Implemented outside the domain core; the core only produces events.
#[async_trait::async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &dyn DomainEvent) -> crate::errors::DomainResult<()>;
}

/// Convenience alias for the event lists returned by aggregate operations
pub type DomainEvents = Vec<Box<dyn DomainEvent>>;
