//! Application wiring.
//!
//! Builds the token store, the session on top of it, and the API client and route
//! guard that share that session.

use std::sync::Arc;
use tracing::info;

use crate::api::{ApiClient, ApiError};
use crate::config::ConfigV1;
use crate::routes::RouteGuard;
use crate::session::Session;
use crate::state::AppState;
use crate::store::create_store;

/// Assembles the shared state from a loaded configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_state(config: Arc<ConfigV1>) -> Result<AppState, ApiError> {
    let store = create_store(&config.store);
    let session = Session::new(store);
    let api = ApiClient::new(&config.api, session.clone())?;
    let guard = RouteGuard::new(session.clone());

    info!("Storefront client ready for {}", api.base_url());

    Ok(AppState {
        config,
        session,
        api,
        guard,
    })
}
