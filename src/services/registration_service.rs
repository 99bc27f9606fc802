//! Registration service - Handles account sign-up business logic.
//!
//! SOLID (SRP): Handles the registration use case only.
//! SOLID (DIP): Depends on hashing and persistence traits, not implementations.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Account, NewAccount};
use crate::errors::AppResult;
use crate::infra::{AccountRepository, PasswordHasher};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Registration service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new account: hash the password, persist, return the
    /// stored account.
    async fn add_account(&self, input: NewAccount) -> AppResult<Account>;
}

/// Concrete implementation of [`RegistrationService`].
pub struct AccountRegistrar {
    hasher: Arc<dyn PasswordHasher>,
    accounts: Arc<dyn AccountRepository>,
}

impl AccountRegistrar {
    /// Create a new registration service instance.
    pub fn new(hasher: Arc<dyn PasswordHasher>, accounts: Arc<dyn AccountRepository>) -> Self {
        Self { hasher, accounts }
    }
}

#[async_trait]
impl RegistrationService for AccountRegistrar {
    async fn add_account(&self, input: NewAccount) -> AppResult<Account> {
        let hashed = self.hasher.hash(&input.password).await?;
        self.accounts
            .add(NewAccount {
                password: hashed,
                ..input
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::{MockAccountRepository, MockPasswordHasher};
    use mockall::predicate::eq;

    fn input() -> NewAccount {
        NewAccount {
            name: "valid_name".to_string(),
            email: "valid_email@mail.com".to_string(),
            password: "valid_password".to_string(),
        }
    }

    fn stored_account() -> Account {
        Account {
            id: "valid_id".to_string(),
            name: "valid_name".to_string(),
            email: "valid_email@mail.com".to_string(),
            password: "hashed_password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_account_hashes_the_given_password() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .with(eq("valid_password"))
            .times(1)
            .returning(|_| Ok("hashed_password".to_string()));

        let mut accounts = MockAccountRepository::new();
        accounts.expect_add().returning(|_| Ok(stored_account()));

        let service = AccountRegistrar::new(Arc::new(hasher), Arc::new(accounts));

        service.add_account(input()).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_account_propagates_hasher_failure() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Err(AppError::hashing("salt generation failed")));

        let mut accounts = MockAccountRepository::new();
        accounts.expect_add().times(0);

        let service = AccountRegistrar::new(Arc::new(hasher), Arc::new(accounts));

        let err = service.add_account(input()).await.unwrap_err();
        assert!(matches!(err, AppError::Hashing(_)));
    }

    #[tokio::test]
    async fn test_add_account_stores_the_hashed_password() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Ok("hashed_password".to_string()));

        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_add()
            .with(eq(NewAccount {
                name: "valid_name".to_string(),
                email: "valid_email@mail.com".to_string(),
                password: "hashed_password".to_string(),
            }))
            .times(1)
            .returning(|_| Ok(stored_account()));

        let service = AccountRegistrar::new(Arc::new(hasher), Arc::new(accounts));

        service.add_account(input()).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_account_propagates_repository_failure() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Ok("hashed_password".to_string()));

        let mut accounts = MockAccountRepository::new();
        accounts.expect_add().returning(|_| {
            Err(AppError::Database(sea_orm::DbErr::Custom(
                "insert failed".to_string(),
            )))
        });

        let service = AccountRegistrar::new(Arc::new(hasher), Arc::new(accounts));

        let err = service.add_account(input()).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_add_account_returns_the_stored_account() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Ok("hashed_password".to_string()));

        let mut accounts = MockAccountRepository::new();
        accounts.expect_add().returning(|_| Ok(stored_account()));

        let service = AccountRegistrar::new(Arc::new(hasher), Arc::new(accounts));

        let account = service.add_account(input()).await.unwrap();
        assert_eq!(account, stored_account());
    }
}
