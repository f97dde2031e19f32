//! API gateway: one HTTP client, grouped per remote resource.
//!
//! Every call is a single attempt. Failures come back unchanged as [`ApiError`].

pub mod auth;
pub mod cart;
pub mod categories;
pub mod client;
pub mod error;
pub mod orders;
pub mod payment;
pub mod products;
pub mod profile;

pub use auth::AuthApi;
pub use cart::CartApi;
pub use categories::CategoryApi;
pub use client::ApiClient;
pub use error::ApiError;
pub use orders::OrderApi;
pub use payment::PaymentApi;
pub use products::ProductApi;
pub use profile::ProfileApi;
