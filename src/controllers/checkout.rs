use futures::try_join;
use tracing::{info, warn};

use super::ViewState;
use crate::api::ApiClient;
use crate::models::cart::subtotal;
use crate::models::{CartLine, CheckoutSessionRequest, NewOrder, Profile};

const PAYMENT_FAILED: &str = "Could not start the payment. Please try again.";

/// Order review and hand-off to the payment provider.
pub struct CheckoutController {
    api: ApiClient,
    pub lines: Vec<CartLine>,
    pub profile: Option<Profile>,
    pub view: ViewState,
}

impl CheckoutController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            lines: Vec::new(),
            profile: None,
            view: ViewState::default(),
        }
    }

    /// Fetches the cart and the shipping profile together. Nothing is shown until
    /// both have arrived.
    pub async fn load(&mut self) {
        self.view.start();
        let cart = self.api.cart();
        let profile = self.api.profile();
        let result = try_join!(cart.get(), profile.get());
        self.view.finish();

        match result {
            Ok((lines, profile)) => {
                self.lines = lines;
                self.profile = profile;
            }
            Err(e) => self
                .view
                .fail("Checkout load failed", &e, "Could not load your order."),
        }
    }

    pub fn total(&self) -> f64 {
        subtotal(&self.lines)
    }

    /// Creates a hosted checkout session for the current lines and returns the page
    /// to send the shopper to, when the service provided one.
    pub async fn pay(&mut self) -> Option<String> {
        if self.lines.is_empty() {
            self.view.error = Some("Your cart is empty.".to_string());
            return None;
        }

        let request = CheckoutSessionRequest {
            order_items: self.lines.clone(),
        };
        self.view.start();
        let result = self.api.payment().create_checkout_session(&request).await;
        self.view.finish();

        match result {
            Ok(session) => {
                if session.url.is_none() {
                    warn!("Checkout session created without a redirect URL");
                    self.view.error = Some(PAYMENT_FAILED.to_string());
                }
                session.url
            }
            Err(e) => {
                self.view.fail("Checkout session failed", &e, PAYMENT_FAILED);
                None
            }
        }
    }

    /// Records the order once the shopper is back from the payment page.
    pub async fn place_order(&mut self) -> bool {
        let order = NewOrder::from_cart(&self.lines);
        self.view.start();
        let result = self.api.orders().create(&order).await;
        self.view.finish();
        match result {
            Ok(()) => {
                info!("Order placed with {} line(s)", order.product.len());
                self.view.notice = Some("Thank you! Your order has been placed.".to_string());
                true
            }
            Err(e) => {
                self.view
                    .fail("Order creation failed", &e, "Could not record your order.");
                false
            }
        }
    }
}
