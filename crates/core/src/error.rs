//! Domain error model.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (input
/// validation, missing records). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A field-level rule was violated (e.g. empty name, negative stock).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Expiry is not strictly after arrival.
    ///
    /// A distinguished case of invalid input, reported on its own so callers
    /// can tell date ordering problems apart from field errors.
    #[error("expiry date {expiry} must be after arrival date {arrival}")]
    DateOrder {
        arrival: DateTime<Utc>,
        expiry: DateTime<Utc>,
    },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn date_order(arrival: DateTime<Utc>, expiry: DateTime<Utc>) -> Self {
        Self::DateOrder { arrival, expiry }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
