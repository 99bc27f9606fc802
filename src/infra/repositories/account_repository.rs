//! Account repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use super::entities::account::ActiveModel;
use crate::domain::{Account, NewAccount};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account and return it with the store-generated id
    async fn add(&self, account: NewAccount) -> AppResult<Account>;
}

/// Concrete implementation of AccountRepository over SeaORM.
///
/// The identifier is generated here, at insert time. There is no unique
/// index on email: duplicate signups are not detected at this layer.
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn add(&self, account: NewAccount) -> AppResult<Account> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(account.name),
            email: Set(account.email),
            password: Set(account.password),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Account::from(model))
    }
}
