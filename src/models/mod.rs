//! Request and response schemas for every storefront resource.
//!
//! Remote documents identify themselves with `_id`; it is exposed here as `id`.

pub mod auth;
pub mod cart;
pub mod category;
pub mod order;
pub mod payment;
pub mod product;
pub mod profile;

pub use auth::{AuthResponse, SignInRequest, SignUpRequest};
pub use cart::{AddToCart, CartLine, MAX_LINE_QUANTITY, MIN_LINE_QUANTITY};
pub use category::{Category, NewCategory};
pub use order::{NewOrder, Order, OrderCustomer, OrderLine, OrderStatusUpdate};
pub use payment::{CheckoutSession, CheckoutSessionRequest};
pub use product::{CategoryRef, Photo, Product, ProductFilter, ProductForm};
pub use profile::Profile;
