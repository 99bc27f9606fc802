//! Email format validation.

use validator::ValidateEmail;

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Syntactic email validation contract.
///
/// The check is fallible so implementations backed by external services can
/// surface their own failures, which the HTTP layer maps to a generic
/// server error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EmailValidator: Send + Sync {
    /// Returns whether `email` is a syntactically valid address.
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}

/// [`EmailValidator`] backed by the `validator` crate's email rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}
