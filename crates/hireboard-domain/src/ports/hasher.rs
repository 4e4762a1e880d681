//! Password hashing port

use crate::errors::DomainResult;

/// Hashing backend consumed by the `Account` entity
///
/// Implemented by an infrastructure crate (argon2, bcrypt, ...); the domain
/// never sees plaintext password storage.
pub trait PasswordHasher: Send + Sync {
    /// Produce a storable hash of the given password
    fn hash_password(&self, password: &str) -> DomainResult<String>;

    /// Check a password against a previously produced hash
    fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool>;
}
