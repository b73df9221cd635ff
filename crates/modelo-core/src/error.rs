//! Remote client errors.

use thiserror::Error;

/// Common result type for remote operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Anything that can go wrong talking to the `/modelo` endpoint.
///
/// The state machine never inspects the variant; every failure collapses
/// into the fixed message of the operation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
