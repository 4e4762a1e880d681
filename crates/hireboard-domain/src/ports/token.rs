//! Token issuance port

use crate::errors::DomainResult;
use crate::user::{RefreshToken, User};

/// Issues access and refresh tokens for an authenticated user
///
/// Consumed by the application layer after credential checks succeed; the
/// aggregates themselves never issue tokens.
pub trait TokenProvider: Send + Sync {
    /// Issue a short-lived access token
    fn issue_access_token(&self, user: &User) -> DomainResult<String>;

    /// Issue a refresh token aggregate tracking expiry and revocation
    fn issue_refresh_token(&self, user: &User) -> DomainResult<RefreshToken>;
}
