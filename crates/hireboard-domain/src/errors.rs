//! Domain errors for Hireboard
//!
//! Every public domain operation reports expected business failures through
//! `DomainResult`; panics are reserved for programming defects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed taxonomy of domain failure kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed or out-of-range input
    Validation,
    /// Referenced entity is absent
    NotFound,
    /// Illegal state transition or duplicate assignment
    Conflict,
    /// Business-rule violation not covered by the other kinds
    Problem,
    /// Unspecified failure
    #[default]
    Failure,
}

/// Core domain error
///
/// Carries a stable machine-readable code, a human-readable message and the
/// failure kind. Multi-field validation failures aggregate their individual
/// violations so callers can report every problem at once.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct DomainError {
    code: String,
    message: String,
    kind: ErrorKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    violations: Vec<DomainError>,
}

impl DomainError {
    /// Validation failure for a single rule
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind: ErrorKind::Validation,
            violations: Vec::new(),
        }
    }

    /// Aggregate several field-level violations into one validation failure
    ///
    /// Falls back to a plain validation error when the list is empty, so the
    /// result always carries a meaningful kind.
    pub fn validation_set(code: impl Into<String>, violations: Vec<DomainError>) -> Self {
        let code = code.into();
        let message = if violations.is_empty() {
            "Validation failed".to_string()
        } else {
            format!("{} validation rule(s) violated", violations.len())
        };
        Self {
            code,
            message,
            kind: ErrorKind::Validation,
            violations,
        }
    }

    /// Referenced entity absent
    pub fn not_found(entity_type: impl Into<String>, id: impl std::fmt::Display) -> Self {
        let entity_type = entity_type.into();
        Self {
            code: format!("{}.NotFound", entity_type),
            message: format!("{} with id {} was not found", entity_type, id),
            kind: ErrorKind::NotFound,
            violations: Vec::new(),
        }
    }

    /// Illegal state transition or duplicate assignment
    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind: ErrorKind::Conflict,
            violations: Vec::new(),
        }
    }

    /// Business-rule violation outside the other kinds
    pub fn problem(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind: ErrorKind::Problem,
            violations: Vec::new(),
        }
    }

    /// Unspecified failure
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            code: "General.Failure".to_string(),
            message: message.into(),
            kind: ErrorKind::Failure,
            violations: Vec::new(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Failure kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Individual violations of an aggregated validation failure
    pub fn violations(&self) -> &[DomainError] {
        &self.violations
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
