//! API layer - HTTP handlers and routing
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Route definitions
//! - Application state (DI container)

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
