//! Library exports for the storefront client, shared between the binary and tests.

pub mod api;
pub mod config;
pub mod controllers;
pub mod models;
pub mod routes;
pub mod session;
pub mod startup;
pub mod state;
pub mod store;
pub mod utils;
