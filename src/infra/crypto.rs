//! Password hashing adapter.
//!
//! The hashing primitive sits behind a trait so the registration service
//! can be exercised in tests without paying the argon2 cost.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher as Argon2PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;

use crate::config::{ARGON2_M_COST_KIB, ARGON2_P_COST, ARGON2_T_COST};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Password hashing contract.
///
/// Outputs are salted: equal inputs produce distinct hashes, so tests stub
/// this trait instead of asserting exact output.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password, returning the PHC-format string.
    async fn hash(&self, plaintext: &str) -> AppResult<String>;
}

/// Argon2id-backed hasher.
///
/// Cost parameters are fixed at construction from `config::constants`;
/// every hash produced by one instance carries the same costs.
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Create a hasher with the configured cost parameters.
    ///
    /// # Panics
    /// Panics if the cost constants are rejected by the argon2 crate.
    pub fn new() -> Self {
        let params = Params::new(ARGON2_M_COST_KIB, ARGON2_T_COST, ARGON2_P_COST, None)
            .expect("argon2 cost constants must be accepted");

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(e.to_string()))?;

        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use argon2::{password_hash::PasswordHash, PasswordVerifier};

    use super::*;

    #[tokio::test]
    async fn test_hash_verifies_against_original() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("any_password").await.unwrap();

        assert_ne!(hash, "any_password");

        // The PHC string embeds its own parameters, so verification does
        // not depend on the hasher's configuration.
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"any_password", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"other_password", &parsed)
            .is_err());
    }

    #[tokio::test]
    async fn test_same_password_hashes_differ() {
        let hasher = Argon2Hasher::new();
        let first = hasher.hash("any_password").await.unwrap();
        let second = hasher.hash("any_password").await.unwrap();

        // Random salts make every hash unique.
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_hash_embeds_configured_costs() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("any_password").await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains(&format!(
            "m={},t={},p={}",
            ARGON2_M_COST_KIB, ARGON2_T_COST, ARGON2_P_COST
        )));
    }
}
