//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`EventsError`]
//! via `#[from]`; no `String` catch-all variants.

use std::error::Error as StdError;

/// Base error type returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum EventsError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Input that can never be accepted, independent of stored state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),

    #[error("invalid calendar date: {0:?}")]
    InvalidDate(String),

    #[error("event description must not be empty")]
    EmptyDescription,
}

/// A referenced record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {key} not found")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"Participant"`.
    pub entity: &'static str,
    /// Identifier or lookup key that missed.
    pub key: String,
}
