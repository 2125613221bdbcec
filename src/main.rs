//! # Tide Client Diagnostic Entry Point
//!
//! Thin CLI driver around the library: loads configuration, builds the API
//! client with a console notifier, and runs the location negotiation flow for
//! the configured identity. Useful for poking a deployed backend without the
//! mini-app runtime; the geolocation capability is stood in by a token from
//! config or environment.

// Test modules
#[cfg(test)]
mod tests;

use std::env;
use std::sync::Arc;

use tide_api_lib::api::ApiClient;
use tide_api_lib::config::Config;
use tide_api_lib::geo::StaticGeolocator;
use tide_api_lib::notify::ConsoleNotifier;
use tide_api_lib::UserIdentity;

use tracing_subscriber::EnvFilter;

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load();

    // Environment overrides let the same config file serve several test
    // accounts (TIDE_USER_ID / TIDE_ACCESS_TOKEN / TIDE_GEO_TOKEN).
    let user_id = env::var("TIDE_USER_ID").unwrap_or_else(|_| config.zalo.user_id.clone());
    let access_token =
        env::var("TIDE_ACCESS_TOKEN").unwrap_or_else(|_| config.zalo.access_token.clone());
    let geo_token = env::var("TIDE_GEO_TOKEN")
        .ok()
        .or_else(|| config.zalo.geo_token.clone());

    if user_id.is_empty() || access_token.is_empty() {
        anyhow::bail!(
            "no identity configured: set [zalo] user_id/access_token in tide-config.toml \
             or TIDE_USER_ID/TIDE_ACCESS_TOKEN in the environment"
        );
    }

    let identity = UserIdentity::new(user_id, access_token);
    let client = ApiClient::new(&config.api, Arc::new(ConsoleNotifier))?;
    let geolocator = StaticGeolocator::new(geo_token);

    // Create Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(client.request_user_location(&identity, &geolocator));

    Ok(())
}
