/// Error types for text generation requests
use thiserror::Error;

/// Failures that abort a generation call.
///
/// A non-200 status is not one of these: it comes back as
/// [`GenerationResult::Failed`](crate::GenerationResult::Failed).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
