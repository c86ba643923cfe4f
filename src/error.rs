use thiserror::Error;

/// Failures surfaced by the API client. The client never retries or
/// reclassifies; the caller decides how to present these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status. The message is the raw
    /// response body, passed through as-is.
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection, DNS, timeout or response-decoding failure from the
    /// underlying HTTP stack.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Status code of the backend response, if the failure got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }
}
