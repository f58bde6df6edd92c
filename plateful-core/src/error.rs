use thiserror::Error;

/// Error type for calls against the remote recipe catalogue.
///
/// These are surfaced opaquely by the client; classifying them into
/// user-facing outcomes is the repository's job.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("API returned status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
