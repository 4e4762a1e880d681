//! Credential record owned by a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::ports::PasswordHasher;
use crate::value_objects::UserId;

/// Stores the password hash for a user
///
/// Hashing is delegated to the injected `PasswordHasher` port; plaintext
/// passwords never persist past these calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    user_id: UserId,
    password_hash: String,
    updated_at: DateTime<Utc>,
}

impl Account {
    /// Create an account with an initial password
    pub fn create(
        user_id: UserId,
        password: &str,
        hasher: &dyn PasswordHasher,
    ) -> DomainResult<Self> {
        let password_hash = hasher.hash_password(password)?;
        Ok(Self {
            user_id,
            password_hash,
            updated_at: Utc::now(),
        })
    }

    /// Reconstitute an account from persistence
    pub fn reconstitute(user_id: UserId, password_hash: String, updated_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            password_hash,
            updated_at,
        }
    }

    /// Replace the stored password hash
    pub fn set_password(&mut self, password: &str, hasher: &dyn PasswordHasher) -> DomainResult<()> {
        self.password_hash = hasher.hash_password(password)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Check a candidate password against the stored hash
    pub fn verify_password(
        &self,
        password: &str,
        hasher: &dyn PasswordHasher,
    ) -> DomainResult<()> {
        if hasher.verify_password(password, &self.password_hash)? {
            Ok(())
        } else {
            Err(DomainError::problem(
                "Account.InvalidCredentials",
                "Invalid credentials",
            ))
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    /// Reversed-string "hash", good enough to exercise the port contract
    struct FakeHasher;

    impl PasswordHasher for FakeHasher {
        fn hash_password(&self, password: &str) -> DomainResult<String> {
            Ok(password.chars().rev().collect())
        }

        fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
            Ok(self.hash_password(password)? == hash)
        }
    }

    #[test]
    fn test_verify_correct_password() {
        let account = Account::create(UserId::new(), "s3cret", &FakeHasher).unwrap();
        assert!(account.verify_password("s3cret", &FakeHasher).is_ok());
    }

    #[test]
    fn test_verify_wrong_password_is_problem() {
        let account = Account::create(UserId::new(), "s3cret", &FakeHasher).unwrap();
        let err = account.verify_password("guess", &FakeHasher).unwrap_err();
        assert_eq!(err.code(), "Account.InvalidCredentials");
        assert_eq!(err.kind(), ErrorKind::Problem);
    }

    #[test]
    fn test_set_password_replaces_hash() {
        let mut account = Account::create(UserId::new(), "s3cret", &FakeHasher).unwrap();
        account.set_password("n3w-one", &FakeHasher).unwrap();
        assert!(account.verify_password("s3cret", &FakeHasher).is_err());
        assert!(account.verify_password("n3w-one", &FakeHasher).is_ok());
    }
}
