//! Error type for backend calls.

use thiserror::Error;

/// Failure modes of a backend request.
///
/// Body-decoding failures surface through [`ApiError::Transport`] as well,
/// since [`reqwest`] reports them as `reqwest::Error`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}
