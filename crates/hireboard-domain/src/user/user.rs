//! User aggregate root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enumerations::UserRole;
use crate::errors::DomainResult;
use crate::events::user::UserRegistered;
use crate::events::DomainEvent;
use crate::value_objects::{Email, PersonalInfo, UserId};

/// A registered platform user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: Email,
    personal_info: PersonalInfo,
    role: UserRole,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    concurrency_version: u64,
}

impl User {
    /// Register a new user
    pub fn create(
        email: Email,
        personal_info: PersonalInfo,
        role: UserRole,
    ) -> DomainResult<(Self, Box<dyn DomainEvent>)> {
        let id = UserId::new();
        let now = Utc::now();
        let user = Self {
            id,
            email: email.clone(),
            personal_info,
            role,
            created_at: now,
            updated_at: now,
            concurrency_version: 1,
        };

        let event = UserRegistered::new(id.as_uuid(), email.as_str().to_string());
        Ok((user, Box::new(event)))
    }

    /// Reconstitute a user from persistence
    pub fn reconstitute(
        id: UserId,
        email: Email,
        personal_info: PersonalInfo,
        role: UserRole,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        concurrency_version: u64,
    ) -> Self {
        Self {
            id,
            email,
            personal_info,
            role,
            created_at,
            updated_at,
            concurrency_version,
        }
    }

    /// Update the user's personal info
    pub fn update_personal_info(&mut self, personal_info: PersonalInfo) {
        self.personal_info = personal_info;
        self.touch();
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn concurrency_version(&self) -> u64 {
        self.concurrency_version
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.concurrency_version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_emits_registered_event() {
        let email = Email::create("anna@example.com").unwrap();
        let personal = PersonalInfo::create("Anna", "Kovalenko", None, None).unwrap();
        let (user, event) = User::create(email, personal, UserRole::Seeker).unwrap();

        assert_eq!(user.role(), UserRole::Seeker);
        assert_eq!(event.event_type(), "UserRegistered");
        assert_eq!(event.aggregate_id(), user.id().as_uuid());
    }

    #[test]
    fn test_update_personal_info_bumps_version() {
        let email = Email::create("anna@example.com").unwrap();
        let personal = PersonalInfo::create("Anna", "Kovalenko", None, None).unwrap();
        let (mut user, _) = User::create(email, personal, UserRole::Recruiter).unwrap();
        let version = user.concurrency_version();

        let renamed = PersonalInfo::create("Hanna", "Kovalenko", None, None).unwrap();
        user.update_personal_info(renamed);
        assert_eq!(user.personal_info().first_name(), "Hanna");
        assert_eq!(user.concurrency_version(), version + 1);
    }
}
