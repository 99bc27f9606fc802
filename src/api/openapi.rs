//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::signup_handler;
use crate::domain::Account;

/// OpenAPI documentation for the Account API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account API",
        version = "0.1.0",
        description = "Account sign-up API with Axum, SeaORM, and clean architecture",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        signup_handler::signup,
    ),
    components(
        schemas(
            Account,
            signup_handler::SignupRequest,
        )
    ),
    tags(
        (name = "Accounts", description = "Account registration")
    )
)]
pub struct ApiDoc;
