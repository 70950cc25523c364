use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Extract the raw token from an `Authorization` header value.
///
/// Missing header, non-bearer scheme, and an empty token are distinct errors
/// here; the HTTP layer maps them all to one uniform 401.
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::TokenMissing {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
