use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{Category, NewCategory};

pub struct CategoryApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn categories(&self) -> CategoryApi<'_> {
        CategoryApi { client: self }
    }
}

impl CategoryApi<'_> {
    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        self.client.get("/category/").await
    }

    pub async fn create(&self, category: &NewCategory) -> Result<(), ApiError> {
        self.client
            .send_json_unit(Method::POST, "/category/", category)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/category/{}", id)).await
    }
}
