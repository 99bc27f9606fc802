//! HTTP request handlers.

pub mod signup_handler;

pub use signup_handler::signup_routes;
