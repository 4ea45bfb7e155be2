/// Error types for backend calls
use thiserror::Error;

/// Ways a backend call can fail.
///
/// Callers on the page collapse every variant into a single failure outcome; the
/// detail only ever reaches the logs.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection refused, DNS failure, reset mid-body, ...
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("Backend returned HTTP {0}")]
    Status(u16),

    /// The body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The call was abandoned because its cancel token fired
    #[error("Request cancelled")]
    Cancelled,
}

impl BackendError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, BackendError::Cancelled)
    }
}
