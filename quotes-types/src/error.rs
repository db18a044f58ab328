//! Error types for the quote service.

/// Failures while fetching a quote from the upstream provider.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Unable to create request: {0}")]
    Request(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Error during API request: {0}")]
    Transport(String),

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Error decoding response: {0}")]
    Decode(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FetchError> for AppError {
    fn from(_: FetchError) -> Self {
        // Upstream detail is logged by the service, not leaked to callers.
        AppError::Internal("Unable to fetch quote".into())
    }
}
