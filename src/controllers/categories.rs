use super::ViewState;
use crate::api::ApiClient;
use crate::models::{Category, NewCategory};

/// Admin category management.
pub struct CategoryController {
    api: ApiClient,
    pub categories: Vec<Category>,
    pub view: ViewState,
}

impl CategoryController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            categories: Vec::new(),
            view: ViewState::default(),
        }
    }

    pub async fn load(&mut self) {
        self.view.start();
        let result = self.api.categories().list().await;
        self.view.finish();
        match result {
            Ok(categories) => self.categories = categories,
            Err(e) => self
                .view
                .fail("Category load failed", &e, "Could not load categories."),
        }
    }

    /// Blank names are ignored without contacting the service.
    pub async fn create(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.view.start();
        let result = self
            .api
            .categories()
            .create(&NewCategory {
                name: name.to_string(),
            })
            .await;
        self.view.finish();
        match result {
            Ok(()) => self.load().await,
            Err(e) => self
                .view
                .fail("Category creation failed", &e, "Could not create the category."),
        }
    }

    pub async fn delete(&mut self, id: &str) {
        self.view.start();
        let result = self.api.categories().delete(id).await;
        self.view.finish();
        match result {
            Ok(()) => self.load().await,
            Err(e) => self
                .view
                .fail("Category deletion failed", &e, "Could not delete the category."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client_for;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_blank_name_sends_nothing() {
        let mut server = Server::new_async().await;
        let create = server
            .mock("POST", "/category/")
            .expect(0)
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), Some("admin"));
        let mut page = CategoryController::new(client);
        page.create("   ").await;

        create.assert_async().await;
        assert!(page.view.error.is_none());
    }

    #[tokio::test]
    async fn test_create_trims_and_reloads() {
        let mut server = Server::new_async().await;
        let create = server
            .mock("POST", "/category/")
            .match_body(Matcher::Json(json!({"name": "Lighting"})))
            .with_status(201)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/category/")
            .with_status(200)
            .with_body(r#"[{"_id": "c1", "name": "Lighting"}]"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), Some("admin"));
        let mut page = CategoryController::new(client);
        page.create("  Lighting ").await;

        create.assert_async().await;
        list.assert_async().await;
        assert_eq!(page.categories.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_shows_server_message() {
        let mut server = Server::new_async().await;
        server
            .mock("DELETE", "/category/c1")
            .with_status(409)
            .with_body(r#""Category still has products""#)
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), Some("admin"));
        let mut page = CategoryController::new(client);
        page.delete("c1").await;

        assert_eq!(
            page.view.error.as_deref(),
            Some("Category still has products")
        );
    }
}
