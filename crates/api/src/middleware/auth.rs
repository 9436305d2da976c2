//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring token authentication in route handlers.

use axum::{
    Json,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::db::TokenRepository;
use crate::models::User;
use crate::state::AppState;

/// Extractor that requires token authentication.
///
/// Resolves the `Authorization: Token <key>` header (the `Bearer` scheme is
/// also accepted) to the owning user. Rejects with 401 otherwise.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireUser(user): RequireUser,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.username)
/// }
/// ```
pub struct RequireUser(pub User);

/// Error returned when authentication is required but missing or invalid.
pub enum AuthRejection {
    /// No `Authorization` header was supplied.
    MissingToken,
    /// The header was malformed or the key is unknown.
    InvalidToken,
    /// Token lookup failed.
    Internal,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "authentication credentials were not provided",
            ),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid token"),
            Self::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl<S> FromRequestParts<S> for RequireUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthRejection::MissingToken)?;

        let key = header
            .strip_prefix("Token ")
            .or_else(|| header.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(AuthRejection::InvalidToken)?;

        let user = TokenRepository::new(state.pool())
            .get_user_by_key(key)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Token lookup failed");
                AuthRejection::Internal
            })?
            .ok_or(AuthRejection::InvalidToken)?;

        Ok(Self(user))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::AuthRejection;

    #[test]
    fn test_rejection_status_codes() {
        assert_eq!(
            AuthRejection::MissingToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthRejection::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthRejection::Internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
