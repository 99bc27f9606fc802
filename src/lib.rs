//! Account API - An account sign-up service
//!
//! This crate provides a clean architecture REST API for registering
//! accounts with Axum, following DDD, SOLID, and DRY principles.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, password hashing)
//! - **api**: HTTP handlers and routes
//! - **utils**: Utility adapters (email validation)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Account, NewAccount};
pub use errors::{AppError, AppResult};
