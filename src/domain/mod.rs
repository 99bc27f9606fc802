//! Domain layer - Core business entities
//!
//! Contains the account records the rest of the application orchestrates,
//! independent of HTTP and storage concerns.

pub mod account;

pub use account::{Account, NewAccount};
