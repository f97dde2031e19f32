use tracing::debug;

use super::ViewState;
use crate::api::ApiClient;
use crate::models::{AddToCart, Product};
use crate::routes::Route;

pub struct ProductDetailsController {
    api: ApiClient,
    pub product: Option<Product>,
    pub view: ViewState,
}

impl ProductDetailsController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            product: None,
            view: ViewState::default(),
        }
    }

    pub async fn load(&mut self, id: &str) {
        self.view.start();
        let result = self.api.products().get(id).await;
        self.view.finish();
        match result {
            Ok(product) => self.product = Some(product),
            Err(e) => self.view.fail("Product load failed", &e, "Product not found."),
        }
    }

    /// Whether the add-to-cart action should be offered at all.
    pub fn can_add_to_cart(&self) -> bool {
        self.product.as_ref().is_some_and(Product::in_stock)
    }

    /// Puts the loaded product in the cart at its current price.
    ///
    /// Returns `Some(Route::Login)` when there is no valid session, `Some(Route::Cart)`
    /// once the line was added, and `None` when nothing was sent or the call failed.
    pub async fn add_to_cart(&mut self) -> Option<Route> {
        // is_authenticated() also drops an expired token.
        let session = self.api.session();
        let auth = if session.is_authenticated() {
            session.auth_data()
        } else {
            None
        };
        let Some(auth) = auth else {
            debug!("Add to cart without a session; sending to login");
            return Some(Route::Login);
        };
        let product = self.product.as_ref()?;
        if !product.in_stock() {
            return None;
        }

        let item = AddToCart {
            product: product.id.clone(),
            price: product.price,
            user: Some(auth.claims.id),
        };
        self.view.start();
        let result = self.api.cart().add(&item).await;
        self.view.finish();
        match result {
            Ok(()) => Some(Route::Cart),
            Err(e) => {
                self.view
                    .fail("Add to cart failed", &e, "Could not add the product to your cart.");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client_for;
    use crate::store::TokenStore;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn user_token() -> String {
        encode(
            &Header::default(),
            &json!({
                "id": "u-7",
                "name": "Ada",
                "email": "ada@example.com",
                "role": "user",
                "exp": Utc::now().timestamp() + 600
            }),
            &EncodingKey::from_secret(b"k"),
        )
        .unwrap()
    }

    async fn mock_product(server: &mut mockito::ServerGuard, quantity: u32) {
        server
            .mock("GET", "/product/p1")
            .with_status(200)
            .with_body(
                json!({
                    "_id": "p1",
                    "name": "Lamp",
                    "desc": "Warm",
                    "price": 19.99,
                    "quantity": quantity,
                    "category": "c1"
                })
                .to_string(),
            )
            .create_async()
            .await;
    }

    #[tokio::test]
    async fn test_add_to_cart_sends_price_snapshot_and_user() {
        let mut server = Server::new_async().await;
        mock_product(&mut server, 2).await;
        let token = user_token();
        let add = server
            .mock("POST", "/cart/")
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .match_body(Matcher::Json(json!({"product": "p1", "price": 19.99, "user": "u-7"})))
            .with_status(201)
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), Some(&token));
        let mut page = ProductDetailsController::new(client);
        page.load("p1").await;
        assert!(page.can_add_to_cart());

        assert_eq!(page.add_to_cart().await, Some(Route::Cart));
        add.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_to_cart_without_session_redirects_to_login() {
        let mut server = Server::new_async().await;
        mock_product(&mut server, 2).await;
        let add = server.mock("POST", "/cart/").expect(0).create_async().await;

        let (client, _) = client_for(&server.url(), None);
        let mut page = ProductDetailsController::new(client);
        page.load("p1").await;

        assert_eq!(page.add_to_cart().await, Some(Route::Login));
        add.assert_async().await;
    }

    #[tokio::test]
    async fn test_expired_session_is_cleared_and_redirects_to_login() {
        let mut server = Server::new_async().await;
        mock_product(&mut server, 2).await;
        let add = server.mock("POST", "/cart/").expect(0).create_async().await;
        let expired = encode(
            &Header::default(),
            &json!({
                "id": "u-7",
                "name": "Ada",
                "email": "ada@example.com",
                "role": "user",
                "exp": Utc::now().timestamp() - 1
            }),
            &EncodingKey::from_secret(b"k"),
        )
        .unwrap();

        let (client, store) = client_for(&server.url(), Some(&expired));
        let mut page = ProductDetailsController::new(client);
        page.load("p1").await;

        assert_eq!(page.add_to_cart().await, Some(Route::Login));
        assert_eq!(store.get().unwrap(), None);
        add.assert_async().await;
    }

    #[tokio::test]
    async fn test_out_of_stock_product_is_not_added() {
        let mut server = Server::new_async().await;
        mock_product(&mut server, 0).await;
        let add = server.mock("POST", "/cart/").expect(0).create_async().await;

        let (client, _) = client_for(&server.url(), Some(&user_token()));
        let mut page = ProductDetailsController::new(client);
        page.load("p1").await;

        assert!(!page.can_add_to_cart());
        assert_eq!(page.add_to_cart().await, None);
        add.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_product_shows_message() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/product/nope")
            .with_status(404)
            .with_body(r#"{"message": "No such product"}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), None);
        let mut page = ProductDetailsController::new(client);
        page.load("nope").await;

        assert!(page.product.is_none());
        assert_eq!(page.view.error.as_deref(), Some("No such product"));
    }
}
