//! Error types for custctl-store
//!
//! Driver failures (connectivity, constraint violations) are kept as the
//! underlying `sqlx::Error`. Missing rows get their own variant so callers can
//! tell "no such customer" apart from "database unreachable".

use thiserror::Error;

use crate::models::ValidationError;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver or database error, including constraint violations
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No row matched the given key
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Update requested for a record that was never persisted
    #[error("customer has no id; create it before updating")]
    MissingId,

    /// Create requested for a record that already has an id
    #[error("customer already persisted with id {0}")]
    AlreadyPersisted(i64),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Create a not-found error for a customer id
    pub fn customer_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "customer",
            id: id.to_string(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
