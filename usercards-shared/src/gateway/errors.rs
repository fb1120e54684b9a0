//! # Fetch Error Types

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for gateway operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Failure of the initial user-listing read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint answered with a non-success status
    #[error("Failed to fetch users: HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The request could not be sent or its body could not be read
    #[error("Failed to fetch users: {0}")]
    Transport(String),

    /// The body was not a JSON array of users
    #[error("Failed to decode users: {0}")]
    Decode(String),

    /// The configured endpoint is unusable, so no request was made
    #[error(transparent)]
    Endpoint(#[from] ConfigError),
}

impl FetchError {
    /// Create a new status error
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Wrap a transport-level error
    pub fn transport<E: std::fmt::Display>(error: E) -> Self {
        Self::Transport(error.to_string())
    }

    /// Wrap a body decoding error
    pub fn decode<E: std::fmt::Display>(error: E) -> Self {
        Self::Decode(error.to_string())
    }

    /// HTTP status carried by the error, if any
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::Endpoint(_) => None,
        }
    }
}
