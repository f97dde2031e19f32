//! Navigation surface: every addressable view and whether it needs a session.

pub mod guard;
pub mod menu;

use std::fmt;

pub use guard::{GuardState, Navigation, NavigationAttempt, RouteGuard};
pub use menu::{dashboard_links, MenuLink};

/// A view the storefront can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Logout,
    ProductDetails(String),
    Dashboard,
    Cart,
    ShippingAddress,
    Checkout,
    /// Shown after the payment provider sends the shopper back.
    OrderComplete,
    MyOrders,
    Categories,
    ProductList,
    CreateProduct,
    UpdateProduct(String),
    /// Admin view of every order.
    AllOrders,
    NotFound,
}

impl Route {
    /// Resolves a path such as `/product/42` or `#/cart`. Unknown paths map to `NotFound`.
    pub fn parse(path: &str) -> Route {
        let path = path.trim().trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["logout"] => Route::Logout,
            ["product", id] => Route::ProductDetails((*id).to_string()),
            ["dashboard"] => Route::Dashboard,
            ["cart"] => Route::Cart,
            ["shippingaddress"] => Route::ShippingAddress,
            ["checkout"] => Route::Checkout,
            ["complete"] => Route::OrderComplete,
            ["order"] => Route::MyOrders,
            ["category"] => Route::Categories,
            ["productlist"] => Route::ProductList,
            ["createproduct"] => Route::CreateProduct,
            ["updateproduct", id] => Route::UpdateProduct((*id).to_string()),
            ["orders"] => Route::AllOrders,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Logout => "/logout".to_string(),
            Route::ProductDetails(id) => format!("/product/{}", id),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Cart => "/cart".to_string(),
            Route::ShippingAddress => "/shippingaddress".to_string(),
            Route::Checkout => "/checkout".to_string(),
            Route::OrderComplete => "/complete".to_string(),
            Route::MyOrders => "/order".to_string(),
            Route::Categories => "/category".to_string(),
            Route::ProductList => "/productlist".to_string(),
            Route::CreateProduct => "/createproduct".to_string(),
            Route::UpdateProduct(id) => format!("/updateproduct/{}", id),
            Route::AllOrders => "/orders".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Whether entering the view requires a valid session.
    pub fn is_protected(&self) -> bool {
        !matches!(
            self,
            Route::Home
                | Route::Login
                | Route::Logout
                | Route::ProductDetails(_)
                | Route::NotFound
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
