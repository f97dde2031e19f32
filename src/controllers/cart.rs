use tracing::debug;

use super::ViewState;
use crate::api::ApiClient;
use crate::models::cart::subtotal;
use crate::models::{CartLine, MAX_LINE_QUANTITY, MIN_LINE_QUANTITY};

const CART_FAILED: &str = "Could not update your cart.";

pub struct CartController {
    api: ApiClient,
    pub lines: Vec<CartLine>,
    pub view: ViewState,
}

impl CartController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            lines: Vec::new(),
            view: ViewState::default(),
        }
    }

    pub async fn load(&mut self) {
        self.view.start();
        let result = self.api.cart().get().await;
        self.view.finish();
        match result {
            Ok(lines) => self.lines = lines,
            Err(e) => self.view.fail("Cart load failed", &e, "Could not load your cart."),
        }
    }

    /// Applies `delta` to a line's quantity. A result outside the allowed range is
    /// rejected locally and nothing is sent. Returns whether the update went through.
    pub async fn change_quantity(&mut self, line_id: &str, delta: i64) -> bool {
        let Some(line) = self.lines.iter().find(|l| l.id == line_id) else {
            return false;
        };
        let Some(quantity) = line.adjusted_quantity(delta) else {
            debug!(
                "Quantity change {} on line {} rejected: must stay within {}..={}",
                delta, line_id, MIN_LINE_QUANTITY, MAX_LINE_QUANTITY
            );
            return false;
        };
        let updated = line.with_quantity(quantity);

        self.view.start();
        let result = self.api.cart().update(&updated).await;
        self.view.finish();
        match result {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(e) => {
                self.view.fail("Cart update failed", &e, CART_FAILED);
                false
            }
        }
    }

    pub async fn remove(&mut self, line_id: &str) {
        self.view.start();
        let result = self.api.cart().remove(line_id).await;
        self.view.finish();
        match result {
            Ok(()) => self.load().await,
            Err(e) => self.view.fail("Cart removal failed", &e, CART_FAILED),
        }
    }

    pub fn subtotal(&self) -> f64 {
        subtotal(&self.lines)
    }
}
