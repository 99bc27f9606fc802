//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Account;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Hashed password (never plaintext)
    pub password: String,
    /// Store-side metadata; not part of the domain account
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database row to domain account, rendering the identifier in
/// string form.
impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Account {
            id: model.id.to_string(),
            name: model.name,
            email: model.email,
            password: model.password,
        }
    }
}
