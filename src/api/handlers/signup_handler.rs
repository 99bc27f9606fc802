//! Account sign-up handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::domain::{Account, NewAccount};
use crate::errors::{AppError, AppResult};

/// Account sign-up request.
///
/// Every field is optional at the wire level so that presence can be
/// checked one field at a time, in a fixed order, with the offending
/// field named in the response.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Account holder display name
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    /// Account email address
    #[schema(example = "john.doe@mail.com")]
    pub email: Option<String>,
    /// Account password
    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
    /// Repeat of the password, must match `password` exactly
    #[schema(example = "SecurePass123!")]
    pub password_confirmation: Option<String>,
}

/// Create sign-up routes
pub fn signup_routes() -> Router<AppState> {
    Router::new().route("/signup", post(signup))
}

/// Extract a required field, treating absent and empty values alike.
fn require<'a>(value: &'a Option<String>, field: &str) -> AppResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::missing_param(field)),
    }
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Accounts",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created successfully", body = Account),
        (status = 400, description = "Missing or invalid parameter"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<Json<Account>> {
    // Presence is validated field by field so the response names the first
    // missing one.
    let name = require(&payload.name, "name")?;
    let email = require(&payload.email, "email")?;
    let password = require(&payload.password, "password")?;
    let confirmation = require(&payload.password_confirmation, "passwordConfirmation")?;

    // Confirmation mismatch takes precedence over email format.
    if password != confirmation {
        return Err(AppError::invalid_param("passwordConfirmation"));
    }

    if !state.email_validator.is_valid(email)? {
        return Err(AppError::invalid_param("email"));
    }

    let account = state
        .registration
        .add_account(NewAccount {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    Ok(Json(account))
}
