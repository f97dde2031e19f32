use tracing::debug;

use super::ViewState;
use crate::api::ApiClient;
use crate::models::Profile;
use crate::routes::Route;

/// Shipping address form, backed by the shopper's profile.
pub struct ShippingController {
    api: ApiClient,
    pub profile: Profile,
    pub view: ViewState,
}

impl ShippingController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            profile: Profile::default(),
            view: ViewState::default(),
        }
    }

    /// Pre-fills the form. A shopper without a profile, or a failed lookup, keeps the
    /// empty form and no message.
    pub async fn load(&mut self) {
        self.view.start();
        let result = self.api.profile().get().await;
        self.view.finish();
        match result {
            Ok(Some(profile)) => self.profile = profile,
            Ok(None) => debug!("No saved profile yet"),
            Err(e) => debug!("Profile lookup failed, starting empty: {}", e),
        }
    }

    /// Saves the address and moves on to checkout.
    pub async fn save(&mut self) -> Option<Route> {
        let missing = self.profile.missing_fields();
        if !missing.is_empty() {
            self.view.error = Some(format!("Please fill in: {}", missing.join(", ")));
            return None;
        }

        self.view.start();
        let result = self.api.profile().set(&self.profile).await;
        self.view.finish();
        match result {
            Ok(()) => Some(Route::Checkout),
            Err(e) => {
                self.view
                    .fail("Profile save failed", &e, "Could not save your address.");
                None
            }
        }
    }
}
