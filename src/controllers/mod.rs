//! One controller per storefront page.
//!
//! Controllers own their page's local state and talk to the service only through
//! [`ApiClient`](crate::api::ApiClient). A failed call leaves the previous state in
//! place and sets an inline message; nothing is retried.

pub mod cart;
pub mod catalog;
pub mod categories;
pub mod checkout;
pub mod login;
pub mod orders;
pub mod product_details;
pub mod products;
pub mod shipping;

pub use cart::CartController;
pub use catalog::CatalogController;
pub use categories::CategoryController;
pub use checkout::CheckoutController;
pub use login::{AuthMode, LoginController, LoginForm};
pub use orders::{OrderScope, OrdersController};
pub use product_details::ProductDetailsController;
pub use products::{ProductEditorController, ProductListController};
pub use shipping::ShippingController;

use tracing::warn;

use crate::api::ApiError;

/// Loading flag and inline messages shared by every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl ViewState {
    pub(crate) fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn finish(&mut self) {
        self.loading = false;
    }

    /// Records a failed call, keeping whatever the page already shows.
    pub(crate) fn fail(&mut self, context: &str, error: &ApiError, default: &str) {
        warn!("{}: {}", context, error);
        self.error = Some(error.user_message(default));
    }
}
