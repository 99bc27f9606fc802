//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and the account repository
//! - Password hashing

pub mod crypto;
pub mod db;
pub mod repositories;

pub use crypto::{Argon2Hasher, PasswordHasher};
pub use db::{Database, Migrator};
pub use repositories::{AccountRepository, AccountStore};

#[cfg(any(test, feature = "test-utils"))]
pub use crypto::MockPasswordHasher;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockAccountRepository;
