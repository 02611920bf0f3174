//! Face client error types.

use thiserror::Error;

pub type FaceResult<T> = Result<T, FaceError>;

#[derive(Debug, Error)]
pub enum FaceError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
