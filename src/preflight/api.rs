//! Catalog API preflight check.

use super::CheckResult;
use crate::models::config::ApiConfig;
use crate::services::catalog_api::CatalogApiClient;

/// Check if the catalog API is reachable.
pub async fn check(config: &ApiConfig) -> CheckResult {
    match CatalogApiClient::new(config.clone()) {
        Ok(client) => {
            if client.ping().await {
                CheckResult::ok("Catalog API", &format!("connected to {}", client.base_url()))
            } else {
                CheckResult::fail(
                    "Catalog API",
                    &format!("no response from {}", client.base_url()),
                    "Start the catalog backend or set MOVIE_CATALOG_API_URL",
                )
            }
        }
        Err(e) => CheckResult::fail(
            "Catalog API",
            &format!("client setup failed: {}", e),
            "Check api.timeout_secs in config.toml",
        ),
    }
}
