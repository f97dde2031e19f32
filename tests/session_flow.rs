mod common;

use mockito::{Matcher, Server};
use serde_json::json;
use storefront_client::controllers::{CartController, LoginController, OrderScope, OrdersController};
use storefront_client::routes::{Navigation, Route};
use storefront_client::session::Role;

use common::{build_app, mint_token, unsigned_token};

#[tokio::test]
async fn test_sign_in_then_authenticated_requests_carry_token() {
    let mut server = Server::new_async().await;
    let token = mint_token("u-1", "user", 3600);
    server
        .mock("POST", "/user/signIn")
        .match_body(Matcher::Json(json!({"email": "u-1@example.com", "password": "pw"})))
        .with_status(200)
        .with_body(json!({ "token": token }).to_string())
        .create_async()
        .await;
    let cart = server
        .mock("GET", "/cart/")
        .match_header("authorization", format!("Bearer {}", token).as_str())
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let app = build_app(&server.url());
    assert_eq!(app.guard.navigate(Route::Cart), Navigation::Redirect(Route::Login));

    let mut login = LoginController::new(app.api.clone());
    login.edit(|form| {
        form.email = "u-1@example.com".into();
        form.password = "pw".into();
    });
    assert_eq!(login.submit().await, Some(Route::Dashboard));

    let auth = app.session.auth_data().expect("session should be valid");
    assert_eq!(auth.token, token);
    assert_eq!(auth.claims.id, "u-1");
    assert_eq!(auth.claims.role, Role::User);
    assert_eq!(app.guard.navigate(Route::Cart), Navigation::Render(Route::Cart));

    let mut page = CartController::new(app.api.clone());
    page.load().await;
    assert!(page.view.error.is_none());
    cart.assert_async().await;
}

#[tokio::test]
async fn test_undecodable_token_is_stored_verbatim_but_grants_nothing() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/user/signIn")
        .with_status(200)
        .with_body(r#"{"token": "abc.def.ghi"}"#)
        .create_async()
        .await;

    let app = build_app(&server.url());
    let mut login = LoginController::new(app.api.clone());
    login.edit(|form| {
        form.email = "someone@example.com".into();
        form.password = "pw".into();
    });
    login.submit().await;

    assert_eq!(app.session.token().as_deref(), Some("abc.def.ghi"));
    assert!(app.session.auth_data().is_none());
    assert!(!app.session.is_authenticated());
    // Malformed tokens are not discarded.
    assert_eq!(app.session.token().as_deref(), Some("abc.def.ghi"));
}

#[tokio::test]
async fn test_expired_token_is_dropped_on_navigation() {
    let server = Server::new_async().await;
    let app = build_app(&server.url());
    app.session
        .sign_in_with(&mint_token("u-1", "user", -1))
        .unwrap();

    assert_eq!(
        app.guard.navigate_path("/checkout"),
        Navigation::Redirect(Route::Login)
    );
    assert_eq!(app.session.token(), None);
}

#[tokio::test]
async fn test_signature_is_not_checked_locally() {
    let server = Server::new_async().await;
    let app = build_app(&server.url());
    let token = unsigned_token(json!({
        "id": "admin-1",
        "name": "Root",
        "email": "root@example.com",
        "role": "admin",
        "exp": chrono::Utc::now().timestamp() + 60
    }));
    app.session.sign_in_with(&token).unwrap();

    let auth = app.session.auth_data().expect("claims should decode");
    assert!(auth.claims.is_admin());
    assert_eq!(
        app.guard.navigate(Route::AllOrders),
        Navigation::Render(Route::AllOrders)
    );
}

#[tokio::test]
async fn test_admin_order_flow_and_logout() {
    let mut server = Server::new_async().await;
    let token = mint_token("admin-1", "admin", 3600);
    server
        .mock("GET", "/order/orders/")
        .match_header("authorization", format!("Bearer {}", token).as_str())
        .with_status(200)
        .with_body(r#"[{"_id": "o1", "product": [], "done": false, "total": 12}]"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/order/o1")
        .match_body(Matcher::Json(json!({"done": true})))
        .with_status(200)
        .create_async()
        .await;

    let app = build_app(&server.url());
    app.session.sign_in_with(&token).unwrap();

    let mut orders = OrdersController::new(app.api.clone(), OrderScope::All);
    orders.load().await;
    assert_eq!(orders.orders.len(), 1);
    orders.toggle_done("o1").await;
    update.assert_async().await;

    assert_eq!(app.guard.navigate(Route::Logout), Navigation::Redirect(Route::Home));
    assert_eq!(app.session.token(), None);
}

#[tokio::test]
async fn test_anonymous_requests_have_no_authorization_header() {
    let mut server = Server::new_async().await;
    let products = server
        .mock("GET", "/product/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let categories = server
        .mock("GET", "/category/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let app = build_app(&server.url());
    let mut catalog = storefront_client::controllers::CatalogController::new(app.api.clone());
    catalog.load().await;

    assert!(catalog.view.error.is_none());
    products.assert_async().await;
    categories.assert_async().await;
}
