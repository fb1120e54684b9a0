//! HTTP client for the user listing.

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::DirectoryConfig;
use crate::models::User;

use super::errors::{FetchError, FetchResult};

/// Reads the initial user collection from the listing endpoint.
///
/// One `GET` per call; no retries and no caching.
#[derive(Clone, Debug)]
pub struct UserGateway {
    endpoint: Url,
    client: Client,
}

impl UserGateway {
    /// Build a gateway for the configured endpoint.
    ///
    /// # Errors
    /// [`FetchError::Endpoint`] when the endpoint fails validation.
    pub fn new(config: &DirectoryConfig) -> FetchResult<Self> {
        let endpoint = config.validate()?;
        Ok(Self {
            endpoint,
            client: Client::new(),
        })
    }

    /// The endpoint this gateway reads from.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch every user from the endpoint.
    ///
    /// # Errors
    /// * [`FetchError::Transport`] when the request cannot be completed
    /// * [`FetchError::Status`] on any non-2xx response
    /// * [`FetchError::Decode`] when the body is not a JSON array of users
    pub async fn fetch_users(&self) -> FetchResult<Vec<User>> {
        debug!(endpoint = %self.endpoint, "fetching users");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| {
                warn!(endpoint = %self.endpoint, error = %err, "user listing request failed");
                FetchError::transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "user listing returned an error status");
            return Err(FetchError::status(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::transport)?;
        let users: Vec<User> = serde_json::from_str(&body).map_err(|err| {
            warn!(endpoint = %self.endpoint, error = %err, "user listing body is not a user array");
            FetchError::decode(err)
        })?;

        info!(count = users.len(), "fetched users");
        Ok(users)
    }
}
