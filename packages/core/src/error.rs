//! Errors surfaced to the viewer.

use thiserror::Error;

/// Failure of a single user-facing operation.
///
/// None of these are fatal: each one ends up as a dismissible toast, and the
/// `Display` text is the message shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("No job selected")]
    MissingIdentifier,
    #[error("Job not found: {0}")]
    NotFound(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("{0}")]
    WriteFailure(String),
    #[error("Please Login First")]
    Unauthenticated,
}
