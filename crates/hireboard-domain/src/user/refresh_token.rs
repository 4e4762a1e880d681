//! Refresh token aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{RefreshTokenId, UserId};

/// A long-lived credential exchangeable for access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshToken {
    id: RefreshTokenId,
    user_id: UserId,
    token: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Issue a new token; expiry must land after issuance
    pub fn issue(
        user_id: UserId,
        token: String,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if token.trim().is_empty() {
            return Err(DomainError::validation(
                "RefreshToken.Empty",
                "Token value cannot be empty",
            ));
        }
        if expires_at <= issued_at {
            return Err(DomainError::validation(
                "RefreshToken.InvalidExpiry",
                "Token expiry must be after issuance",
            ));
        }

        Ok(Self {
            id: RefreshTokenId::new(),
            user_id,
            token,
            issued_at,
            expires_at,
            revoked_at: None,
        })
    }

    /// Reconstitute a token from persistence
    pub fn reconstitute(
        id: RefreshTokenId,
        user_id: UserId,
        token: String,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        revoked_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            user_id,
            token,
            issued_at,
            expires_at,
            revoked_at,
        }
    }

    /// Revoke the token; one-way, revoking twice is a conflict
    pub fn revoke(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.revoked_at.is_some() {
            return Err(DomainError::conflict(
                "RefreshToken.AlreadyRevoked",
                "Token has already been revoked",
            ));
        }
        self.revoked_at = Some(now);
        Ok(())
    }

    /// Usable when not revoked and not past expiry
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }

    pub fn id(&self) -> RefreshTokenId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn revoked_at(&self) -> Option<DateTime<Utc>> {
        self.revoked_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::errors::ErrorKind;

    fn sample_token() -> RefreshToken {
        let now = Utc::now();
        RefreshToken::issue(
            UserId::new(),
            "opaque-token".to_string(),
            now,
            now + Duration::days(30),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_and_active_window() {
        let token = sample_token();
        assert!(token.is_active(Utc::now()));
        assert!(!token.is_active(token.expires_at() + Duration::seconds(1)));
    }

    #[test]
    fn test_expiry_before_issuance_rejected() {
        let now = Utc::now();
        let err = RefreshToken::issue(
            UserId::new(),
            "opaque-token".to_string(),
            now,
            now - Duration::minutes(5),
        )
        .unwrap_err();
        assert_eq!(err.code(), "RefreshToken.InvalidExpiry");
    }

    #[test]
    fn test_revoke_is_one_way() {
        let mut token = sample_token();
        token.revoke(Utc::now()).unwrap();
        assert!(!token.is_active(Utc::now()));

        let err = token.revoke(Utc::now()).unwrap_err();
        assert_eq!(err.code(), "RefreshToken.AlreadyRevoked");
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }
}
