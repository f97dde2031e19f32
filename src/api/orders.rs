use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{NewOrder, Order, OrderStatusUpdate};

pub struct OrderApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn orders(&self) -> OrderApi<'_> {
        OrderApi { client: self }
    }
}

impl OrderApi<'_> {
    /// Orders placed by the signed-in user.
    pub async fn list_mine(&self) -> Result<Vec<Order>, ApiError> {
        self.client.get("/order/").await
    }

    /// Every order in the shop (admin).
    pub async fn list_all(&self) -> Result<Vec<Order>, ApiError> {
        self.client.get("/order/orders/").await
    }

    pub async fn create(&self, order: &NewOrder) -> Result<(), ApiError> {
        self.client.send_json_unit(Method::POST, "/order/", order).await
    }

    pub async fn update(&self, id: &str, update: &OrderStatusUpdate) -> Result<(), ApiError> {
        self.client
            .send_json_unit(Method::PUT, &format!("/order/{}", id), update)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/order/{}", id)).await
    }
}
