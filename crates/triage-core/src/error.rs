//! Error types for triage-core.

/// Result type for triage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during triage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A GitHub request failed.
    #[error(transparent)]
    GitHub(#[from] triage_github::Error),
}
