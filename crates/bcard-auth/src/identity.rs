use crate::{AuthError, Claims};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// The decoded, trusted identity for one request.
///
/// Reconstructed per-request from a verified token and threaded explicitly
/// into every resource-service call; never stored in shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub is_business: bool,
    pub is_admin: bool,
}

impl TryFrom<Claims> for Identity {
    type Error = AuthError;

    #[track_caller]
    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("not a UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            user_id,
            is_business: claims.is_business,
            is_admin: claims.is_admin,
        })
    }
}
