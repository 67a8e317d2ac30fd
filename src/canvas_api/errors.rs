//! Error types for Canvas API calls

use reqwest::StatusCode;

/// Result type alias for Canvas API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Error types for Canvas API calls
///
/// None of these are retried: every variant ends the run.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Canvas answered with a non-success status
    #[error("Canvas returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// Response body was not the expected JSON
    #[error("Malformed JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Endpoint URL could not be built from the base URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Whether the server rejected the access token
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}
