//! Error types for inference backend calls.

use std::time::Duration;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Error type for inference backend operations
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The remote endpoint answered with a non-success status.
    #[error("Upstream error: status {status}")]
    Upstream {
        status: u16,
        body: String,
    },

    /// No answer within the configured request timeout.
    #[error("Timeout error: no response after {0:?}")]
    Timeout(Duration),

    /// The remote endpoint could not be reached at all.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Any other transport failure (TLS, malformed response, body read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend could not be built from the given configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BackendError {
    /// Create an upstream error from a status code and response body.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether a later attempt could succeed without any change on our side.
    ///
    /// The gateway never retries on its own; this is for callers embedding a
    /// backend that want their own retry policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Unavailable(_) => true,
            Self::Upstream { status, .. } => *status == 429 || *status >= 500,
            Self::Transport(_) | Self::Configuration(_) => false,
        }
    }
}

#[cfg(feature = "http-backend")]
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Unavailable(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
