use serde::{Deserialize, Serialize};

use super::CartLine;

/// Body of `POST /payment/create-checkout-session`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSessionRequest {
    #[serde(rename = "orderItems")]
    pub order_items: Vec<CartLine>,
}

/// The payment provider's hosted page. Absent when the service declined to create one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    #[serde(default)]
    pub url: Option<String>,
}
