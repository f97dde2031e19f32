use reqwest::multipart::Form;
use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{Product, ProductFilter, ProductForm};

pub struct ProductApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn products(&self) -> ProductApi<'_> {
        ProductApi { client: self }
    }
}

impl ProductApi<'_> {
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.client.get("/product/").await
    }

    pub async fn get(&self, id: &str) -> Result<Product, ApiError> {
        self.client.get(&format!("/product/{}", id)).await
    }

    /// Uploads as `multipart/form-data` so the photo can travel with the fields.
    pub async fn create(&self, form: &ProductForm) -> Result<(), ApiError> {
        let body = multipart_body(form)?;
        self.client
            .send_multipart(Method::POST, "/product/", body)
            .await
    }

    pub async fn update(&self, id: &str, form: &ProductForm) -> Result<(), ApiError> {
        let body = multipart_body(form)?;
        self.client
            .send_multipart(Method::PUT, &format!("/product/{}", id), body)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/product/{}", id)).await
    }

    /// Server-side filtering by category set and price range.
    pub async fn filter(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        self.client
            .send_json(Method::POST, "/product/filter", filter)
            .await
    }

    /// Where the product's photo is served from. No request is made.
    pub fn photo_url(&self, id: &str) -> String {
        self.client.url(&format!("/product/getPhoto/{}", id))
    }
}

fn multipart_body(form: &ProductForm) -> Result<Form, ApiError> {
    form.to_multipart()
        .map_err(|e| ApiError::Validation(format!("Invalid photo: {}", e)))
}
