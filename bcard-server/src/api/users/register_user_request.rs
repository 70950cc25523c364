use crate::api::error::{ApiError, Result as ApiResult};

use bcard_core::{Address, Image, PersonName, validation};

use serde::Deserialize;

/// Registration payload.
///
/// `isAdmin` is deliberately absent: registration can never mint an admin,
/// and an `isAdmin` key in the body is silently ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub name: PersonName,
    pub phone: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub image: Option<Image>,
    pub address: Address,
    #[serde(default)]
    pub is_business: bool,
}

impl RegisterUserRequest {
    pub fn validate(&self) -> ApiResult<()> {
        ApiError::collect_validation([
            validation::validate_name(&self.name),
            validation::validate_phone(&self.phone),
            validation::validate_email(&self.email),
            validation::validate_password(&self.password),
            match self.image {
                Some(ref image) => validation::validate_user_image(image),
                None => Ok(()),
            },
            validation::validate_address(&self.address),
        ])
    }

    /// The image to store: the supplied one, or an empty placeholder.
    pub fn image_or_default(&self) -> Image {
        self.image.clone().unwrap_or(Image {
            url: String::new(),
            alt: String::new(),
        })
    }
}
