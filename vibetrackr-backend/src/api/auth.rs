//! Bearer-token request authentication
//!
//! The pure token helpers live in `vibetrackr_common::api::auth`; this
//! module is the axum-facing extractor that resolves a presented token
//! to its owning user.

use crate::error::ApiError;
use crate::AppState;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use vibetrackr_common::api::auth::{hash_token, parse_bearer};
use vibetrackr_common::db::models::User;

/// The authenticated user for a request
///
/// Extracting this rejects the request with 401 unless a valid
/// `Authorization: Bearer <token>` header resolves to a known user.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = parse_bearer(header)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        let user = crate::db::users::find_user_by_token_hash(&state.db, &hash_token(token))
            .await
            .map_err(ApiError::Common)?
            .ok_or_else(|| ApiError::Unauthorized("Unknown token".to_string()))?;

        Ok(AuthUser(user))
    }
}
