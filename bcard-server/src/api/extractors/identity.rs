//! Bearer-token authentication extractor
//!
//! Handlers that need a caller identity take `AuthIdentity` as an
//! argument; the extractor reads the `Authorization` header, verifies
//! the token, and hands the handler a parsed [`Identity`]. Any failure
//! along the way is a uniform 401 so the response never reveals whether
//! a token was absent, malformed, expired, or forged.

use crate::api::error::ApiError;
use crate::app_state::AppState;

use bcard_auth::{Identity, bearer_token};

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

/// Verified caller identity, extracted from the `Authorization` header.
#[derive(Debug, Clone, Copy)]
pub struct AuthIdentity(pub Identity);

impl<S> FromRequestParts<S> for AuthIdentity
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .map(|value| value.to_str())
            .transpose()
            .map_err(|_| {
                log::debug!("Authorization header is not valid UTF-8");
                ApiError::unauthorized()
            })?;

        let token = bearer_token(header).map_err(|e| {
            log::debug!("Bearer token rejected: {e}");
            ApiError::unauthorized()
        })?;

        let claims = state.tokens.verify(token).map_err(|e| {
            log::debug!("Token verification failed: {e}");
            ApiError::unauthorized()
        })?;

        let identity = Identity::try_from(claims).map_err(|e| {
            log::debug!("Token claims rejected: {e}");
            ApiError::unauthorized()
        })?;

        Ok(AuthIdentity(identity))
    }
}
