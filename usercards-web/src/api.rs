//! Startup data loading.

use crate::config::FrontendConfig;
use shared::{FetchResult, User, UserGateway};
use tracing::error;

/// Fetch the initial user collection for the page.
///
/// Runs once at startup. Fetch failures are logged by the gateway; only a
/// rejected endpoint is logged here.
pub async fn load_directory(config: &FrontendConfig) -> FetchResult<Vec<User>> {
    let gateway = UserGateway::new(&config.directory()).inspect_err(|err| {
        error!(error = %err, "users endpoint rejected");
    })?;
    gateway.fetch_users().await
}
