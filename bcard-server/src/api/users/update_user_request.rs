use crate::api::error::{ApiError, Result as ApiResult};

use bcard_core::{Address, Image, PersonName, validation};

use serde::Deserialize;

/// Full profile update payload.
///
/// Only profile fields are deserialized; `email`, `password`, `isBusiness`,
/// and `isAdmin` keys in the body are ignored, which keeps those fields
/// immutable through this endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: PersonName,
    pub phone: String,
    pub image: Image,
    pub address: Address,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> ApiResult<()> {
        ApiError::collect_validation([
            validation::validate_name(&self.name),
            validation::validate_phone(&self.phone),
            validation::validate_user_image(&self.image),
            validation::validate_address(&self.address),
        ])
    }
}
