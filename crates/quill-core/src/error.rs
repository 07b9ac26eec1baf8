//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Post not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Tag codec errors - the stored form could not be decoded.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Stored tags are not a valid JSON string array: {0}")]
    Decode(String),
}
