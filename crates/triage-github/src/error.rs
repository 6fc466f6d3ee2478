//! Error types for GitHub operations.

/// Result type for GitHub operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No access token could be found.
    #[error("no GitHub token found (set {0})")]
    MissingToken(String),

    /// The token was rejected.
    #[error("authentication failed - check your GitHub token")]
    AuthenticationFailed,

    /// The token is valid but lacks permission for the request.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The API rate limit is exhausted.
    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    /// The API answered with an unexpected status.
    #[error("GitHub API error ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Message from the response body.
        message: String,
    },

    /// Transport or decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured API URL cannot be used to build request URLs.
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Whether every later request would fail the same way.
    ///
    /// Credential and quota problems are not specific to one issue or pull
    /// request, so workflows stop on them instead of moving to the next item.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingToken(_) | Self::AuthenticationFailed | Self::Forbidden(_) | Self::RateLimited
        )
    }
}
