//! Application state - Dependency injection container.
//!
//! Provides centralized access to the registration service and its
//! collaborators.

use std::sync::Arc;

use crate::infra::{AccountStore, Argon2Hasher, Database};
use crate::services::{AccountRegistrar, RegistrationService};
use crate::utils::{EmailValidator, EmailValidatorAdapter};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Account registration service
    pub registration: Arc<dyn RegistrationService>,
    /// Email format validation
    pub email_validator: Arc<dyn EmailValidator>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state wired with the production implementations:
    /// Argon2 hashing and the SeaORM-backed account store.
    pub fn from_config(database: Arc<Database>) -> Self {
        let hasher = Arc::new(Argon2Hasher::new());
        let accounts = Arc::new(AccountStore::new(database.get_connection()));
        let registration = Arc::new(AccountRegistrar::new(hasher, accounts));

        Self {
            registration,
            email_validator: Arc::new(EmailValidatorAdapter::new()),
            database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        email_validator: Arc<dyn EmailValidator>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            registration,
            email_validator,
            database,
        }
    }
}
