use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{AddToCart, CartLine};

pub struct CartApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn cart(&self) -> CartApi<'_> {
        CartApi { client: self }
    }
}

impl CartApi<'_> {
    pub async fn get(&self) -> Result<Vec<CartLine>, ApiError> {
        self.client.get("/cart/").await
    }

    pub async fn add(&self, item: &AddToCart) -> Result<(), ApiError> {
        self.client.send_json_unit(Method::POST, "/cart/", item).await
    }

    /// Sends the whole line carrying its new quantity.
    pub async fn update(&self, line: &CartLine) -> Result<(), ApiError> {
        self.client
            .send_json_unit(Method::PUT, &format!("/cart/{}", line.id), line)
            .await
    }

    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/cart/{}", id)).await
    }
}
