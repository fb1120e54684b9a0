//! Endpoint settings for the directory and their validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Listing endpoint used when nothing else is configured.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Errors raised while validating a [`DirectoryConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint is not an absolute `http`/`https` URL.
    #[error("Invalid users endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The configured value.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Settings for loading the directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// URL answering `GET` with a JSON array of users.
    pub users_endpoint: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DirectoryConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            users_endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
        }
    }

    /// Replaces the users endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.users_endpoint = endpoint.into();
        self
    }

    /// Checks the endpoint and returns it parsed.
    ///
    /// # Errors
    /// [`ConfigError::InvalidEndpoint`] when the endpoint does not parse as a
    /// URL or its scheme is neither `http` nor `https`.
    pub fn validate(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: self.users_endpoint.clone(),
            reason,
        };

        let url = Url::parse(&self.users_endpoint).map_err(|err| invalid(err.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }
}
