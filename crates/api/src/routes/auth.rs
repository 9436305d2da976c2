//! Signup and login route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use gamestore_core::{Email, UserId, Username};

use crate::error::Result;
use crate::services::auth::{AuthService, SignupData};
use crate::state::AppState;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Signup request body.
///
/// Every field is defaulted so that missing required fields surface as
/// field-level validation errors rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postal_code: i32,
}

/// Signup response body.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user_id: UserId,
    pub email: Email,
    pub username: Username,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a new account.
///
/// POST /signup
///
/// # Errors
///
/// Returns a 400 with field-level errors if validation fails or the
/// username/email is already taken.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>)> {
    let auth = AuthService::new(state.pool());

    let data = SignupData {
        username: req.username,
        email: req.email,
        password: req.password,
        first_name: req.first_name,
        last_name: req.last_name,
        address: req.address,
        city: req.city,
        country: req.country,
        postal_code: req.postal_code,
    };

    let user = auth.register(&data).await?;

    tracing::info!(user_id = %user.id, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            user_id: user.id,
            email: user.email,
            username: user.username,
        }),
    ))
}

/// Exchange credentials for the account's API token.
///
/// POST /login
///
/// The same token is returned on repeated logins.
///
/// # Errors
///
/// Returns a 401 on bad credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let auth = AuthService::new(state.pool());

    let token = auth.login(&req.username, &req.password).await?;

    Ok(Json(LoginResponse { token }))
}
