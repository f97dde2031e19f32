use futures::try_join;
use tracing::info;

use super::ViewState;
use crate::api::ApiClient;
use crate::models::{Category, Product, ProductForm};
use crate::routes::Route;

const SAVE_FAILED: &str = "Could not save the product.";

/// Admin product table.
pub struct ProductListController {
    api: ApiClient,
    pub products: Vec<Product>,
    pub view: ViewState,
}

impl ProductListController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            products: Vec::new(),
            view: ViewState::default(),
        }
    }

    pub async fn load(&mut self) {
        self.view.start();
        let result = self.api.products().list().await;
        self.view.finish();
        match result {
            Ok(products) => self.products = products,
            Err(e) => self
                .view
                .fail("Product list load failed", &e, "Could not load products."),
        }
    }

    pub async fn delete(&mut self, id: &str) {
        self.view.start();
        let result = self.api.products().delete(id).await;
        self.view.finish();
        match result {
            Ok(()) => self.load().await,
            Err(e) => self
                .view
                .fail("Product deletion failed", &e, "Could not delete the product."),
        }
    }
}

/// Create and update pages share one form.
pub struct ProductEditorController {
    api: ApiClient,
    /// `None` while creating a new product.
    product_id: Option<String>,
    pub form: ProductForm,
    pub categories: Vec<Category>,
    pub view: ViewState,
}

impl ProductEditorController {
    pub fn for_create(api: ApiClient) -> Self {
        Self {
            api,
            product_id: None,
            form: ProductForm::default(),
            categories: Vec::new(),
            view: ViewState::default(),
        }
    }

    pub fn for_update(api: ApiClient, product_id: &str) -> Self {
        Self {
            product_id: Some(product_id.to_string()),
            ..Self::for_create(api)
        }
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    /// Loads the category choices and, when editing, the product itself to pre-fill
    /// the form.
    pub async fn load(&mut self) {
        self.view.start();
        let categories_api = self.api.categories();
        let products_api = self.api.products();
        match self.product_id.as_deref() {
            None => match categories_api.list().await {
                Ok(categories) => self.categories = categories,
                Err(e) => self
                    .view
                    .fail("Category load failed", &e, "Could not load categories."),
            },
            Some(id) => match try_join!(categories_api.list(), products_api.get(id)) {
                Ok((categories, product)) => {
                    self.categories = categories;
                    self.form = ProductForm::from_product(&product);
                }
                Err(e) => self
                    .view
                    .fail("Product load failed", &e, "Could not load the product."),
            },
        }
        self.view.finish();
    }

    /// Validates and uploads the form. Returns the product list route once saved.
    pub async fn submit(&mut self) -> Option<Route> {
        if let Err(message) = self.form.validate() {
            self.view.error = Some(message);
            return None;
        }

        self.view.start();
        self.view.notice = None;
        let products = self.api.products();
        let result = match self.product_id.as_deref() {
            None => products.create(&self.form).await,
            Some(id) => products.update(id, &self.form).await,
        };
        self.view.finish();

        match result {
            Ok(()) => {
                let notice = match self.product_id {
                    None => "Product published successfully!",
                    Some(_) => "Product updated successfully!",
                };
                info!("{} ({})", notice, self.form.name);
                self.view.notice = Some(notice.to_string());
                if self.product_id.is_none() {
                    self.form = ProductForm::default();
                }
                Some(Route::ProductList)
            }
            Err(e) => {
                self.view.fail("Product save failed", &e, SAVE_FAILED);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client_for;
    use mockito::{Matcher, Server};

    const CATEGORIES: &str = r#"[{"_id": "c1", "name": "Lighting"}, {"_id": "c2", "name": "Floor"}]"#;

    #[tokio::test]
    async fn test_update_prefills_form_from_populated_category() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/category/")
            .with_status(200)
            .with_body(CATEGORIES)
            .create_async()
            .await;
        server
            .mock("GET", "/product/p1")
            .with_status(200)
            .with_body(
                r#"{"_id": "p1", "name": "Rug", "desc": "Soft", "price": 40, "quantity": 2, "category": {"_id": "c2", "name": "Floor"}}"#,
            )
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), Some("admin"));
        let mut page = ProductEditorController::for_update(client, "p1");
        page.load().await;

        assert_eq!(page.categories.len(), 2);
        assert_eq!(page.form.name, "Rug");
        assert_eq!(page.form.category, "c2");
        assert_eq!(page.form.quantity, "2");
        assert!(page.form.photo.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_incomplete_form_locally() {
        let mut server = Server::new_async().await;
        let create = server
            .mock("POST", "/product/")
            .expect(0)
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), Some("admin"));
        let mut page = ProductEditorController::for_create(client);
        page.form.name = "Lamp".into();

        assert_eq!(page.submit().await, None);
        assert!(page.view.error.as_deref().unwrap().contains("price"));
        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_publishes_and_resets_form() {
        let mut server = Server::new_async().await;
        let create = server
            .mock("POST", "/product/")
            .match_body(Matcher::Regex("name=\"category\"".to_string()))
            .with_status(201)
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), Some("admin"));
        let mut page = ProductEditorController::for_create(client);
        page.form = ProductForm {
            name: "Lamp".into(),
            desc: "Warm".into(),
            price: "12.5".into(),
            quantity: "3".into(),
            category: "c1".into(),
            photo: None,
        };

        assert_eq!(page.submit().await, Some(Route::ProductList));
        assert_eq!(
            page.view.notice.as_deref(),
            Some("Product published successfully!")
        );
        assert_eq!(page.form, ProductForm::default());
        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_failure_keeps_form() {
        let mut server = Server::new_async().await;
        server
            .mock("PUT", "/product/p1")
            .with_status(500)
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), Some("admin"));
        let mut page = ProductEditorController::for_update(client, "p1");
        page.form = ProductForm {
            name: "Rug".into(),
            desc: "Soft".into(),
            price: "40".into(),
            quantity: "2".into(),
            category: "c2".into(),
            photo: None,
        };

        assert_eq!(page.submit().await, None);
        assert_eq!(page.form.name, "Rug");
        assert_eq!(page.view.error.as_deref(), Some(SAVE_FAILED));
        assert!(page.view.notice.is_none());
    }

    #[tokio::test]
    async fn test_list_delete_reloads() {
        let mut server = Server::new_async().await;
        let delete = server
            .mock("DELETE", "/product/p1")
            .with_status(200)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/product/")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), Some("admin"));
        let mut page = ProductListController::new(client);
        page.delete("p1").await;

        delete.assert_async().await;
        list.assert_async().await;
        assert!(page.products.is_empty());
    }
}
