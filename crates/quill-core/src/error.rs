//! Domain-level error types.

use thiserror::Error;

/// Validation errors - recoverable form-input failures.
///
/// Nothing here is fatal: the failing operation is aborted, prior state is
/// left intact, and the viewer is told what to fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("content cannot be empty")]
    EmptyContent,

    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("backing store unavailable: {0}")]
    Unavailable(String),

    #[error("lookup failed: {0}")]
    Lookup(String),
}

/// Errors surfaced by viewer-session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
