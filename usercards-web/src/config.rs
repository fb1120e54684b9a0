//! Frontend configuration module
//!
//! Build-time settings for the directory page.

use shared::config::{DEFAULT_USERS_ENDPOINT, DirectoryConfig};

/// Frontend configuration for the users endpoint
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// URL of the user listing, overridable at build time through
    /// `USERCARDS_USERS_ENDPOINT`
    pub users_endpoint: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            users_endpoint: option_env!("USERCARDS_USERS_ENDPOINT")
                .unwrap_or(DEFAULT_USERS_ENDPOINT)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings handed to the fetch gateway
    #[must_use]
    pub fn directory(&self) -> DirectoryConfig {
        DirectoryConfig::with_defaults().with_endpoint(self.users_endpoint.clone())
    }
}
