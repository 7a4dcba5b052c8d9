//! Domain error types for the short-code registry.

use thiserror::Error;

/// Input rejected before any code is generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The `params` payload is missing or not a JSON object.
    #[error("Invalid parameters")]
    InvalidParameters,
}

/// Failure to resolve a short code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The code is missing or empty.
    #[error("Invalid code")]
    InvalidCode,

    /// Neither backend holds the code (never written, expired, or lost on restart).
    #[error("URL not found or expired")]
    NotFound,
}

/// Errors raised by an [`crate::domain::repositories::EntryStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store command failed: {0}")]
    Command(String),

    #[error("stored value could not be decoded: {0}")]
    Decode(String),

    #[error("entry could not be encoded: {0}")]
    Encode(String),
}

