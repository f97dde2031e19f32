use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Product;

/// Bounds enforced on a cart line's quantity before any update is sent.
pub const MIN_LINE_QUANTITY: u32 = 1;
pub const MAX_LINE_QUANTITY: u32 = 5;

/// One cart line. `price` is the unit price captured when the line was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "_id")]
    pub id: String,
    pub product: Product,
    pub price: f64,
    pub quantity: u32,
    /// Fields the service sent that are not modelled here (e.g. `user`). They are
    /// sent back untouched with `PUT /cart/{id}`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// The quantity after applying `delta`, or `None` when it would leave
    /// `[MIN_LINE_QUANTITY, MAX_LINE_QUANTITY]`.
    pub fn adjusted_quantity(&self, delta: i64) -> Option<u32> {
        let next = i64::from(self.quantity).checked_add(delta)?;
        if next < i64::from(MIN_LINE_QUANTITY) || next > i64::from(MAX_LINE_QUANTITY) {
            return None;
        }
        u32::try_from(next).ok()
    }

    /// Copy of this line carrying the new quantity, as sent with `PUT /cart/{id}`.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

/// Sum of price × quantity over all lines.
pub fn subtotal(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::line_total).sum()
}

/// Body of `POST /cart/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddToCart {
    pub product: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}
