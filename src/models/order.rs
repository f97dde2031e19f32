use serde::{Deserialize, Serialize};

use super::CartLine;

/// An order as listed by `/order/` and `/order/orders/`.
///
/// The service reports an amount under `total` on some orders and `price` on
/// others. Which one is authoritative is not settled, so both are kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, rename = "product")]
    pub lines: Vec<OrderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<OrderCustomer>,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(
        default,
        rename = "createdAt",
        alias = "time",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id.clone(),
            price: line.price,
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCustomer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /order/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub product: Vec<OrderLine>,
}

impl NewOrder {
    pub fn from_cart(lines: &[CartLine]) -> Self {
        Self {
            product: lines.iter().map(OrderLine::from).collect(),
        }
    }
}

/// Body of `PUT /order/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderStatusUpdate {
    pub done: bool,
}
