//! Account domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted account.
///
/// Created exactly once by the account store; the `id` is store-generated
/// and the `password` field always holds the hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    /// Store-generated identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// Display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Hashed password
    pub password: String,
}

/// Data required to create an account.
///
/// Derived from a signup request after validation; the confirmation field
/// never reaches this type. `password` carries the plaintext until the
/// registration service replaces it with the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Keep the (possibly plaintext) password out of debug output.
impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_serializes_all_fields() {
        let account = Account {
            id: "valid_id".to_string(),
            name: "valid_name".to_string(),
            email: "valid_email@mail.com".to_string(),
            password: "hashed_password".to_string(),
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["id"], "valid_id");
        assert_eq!(json["name"], "valid_name");
        assert_eq!(json["email"], "valid_email@mail.com");
        assert_eq!(json["password"], "hashed_password");
    }

    #[test]
    fn test_new_account_debug_redacts_password() {
        let input = NewAccount {
            name: "any_name".to_string(),
            email: "any_email@mail.com".to_string(),
            password: "any_password".to_string(),
        };

        let rendered = format!("{:?}", input);
        assert!(!rendered.contains("any_password"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
