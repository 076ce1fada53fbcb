use thiserror::Error;

/// Failures of a single question request. Each one ends that request and is
/// shown to the user; none of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build the request: {0}")]
    Encoding(String),

    #[error("Could not reach the question service: {0}")]
    Transport(String),

    /// Carries the status only. Vendor response bodies stay out of anything
    /// user facing.
    #[error("The question service responded with status {0}.")]
    Server(u16),

    #[error("Failed to read the question service response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No question found.")]
    EmptyResult,
}
