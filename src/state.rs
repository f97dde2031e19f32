//! Shared application state.
//!
//! Everything a page needs to talk to the service and to decide navigation.

use crate::api::ApiClient;
use crate::config::ConfigV1;
use crate::routes::RouteGuard;
use crate::session::Session;
use std::sync::Arc;

/// State shared by every controller and the navigation shell.
///
/// Cheap to clone: the configuration, the HTTP pool and the token store are shared.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Credential context backed by the configured token store.
    pub session: Session,
    /// Gateway to the storefront REST service.
    pub api: ApiClient,
    /// Decides whether a navigation renders or redirects.
    pub guard: RouteGuard,
}
