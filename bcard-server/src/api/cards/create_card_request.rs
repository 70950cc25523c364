use crate::api::error::{ApiError, Result as ApiResult};

use bcard_core::{Address, Image, validation};
use bcard_core::validation::{DESCRIPTION_MAX, TITLE_MAX};

use serde::Deserialize;

/// Card creation payload.
///
/// The owner is never taken from the body; it is always the authenticated
/// caller. `bizNumber` is optional and generated when absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub web: Option<String>,
    pub image: Image,
    pub address: Address,
    #[serde(default)]
    pub biz_number: Option<i64>,
}

impl CreateCardRequest {
    pub fn validate(&self) -> ApiResult<()> {
        ApiError::collect_validation([
            validation::validate_text("title", &self.title, 2, TITLE_MAX),
            validation::validate_text("subtitle", &self.subtitle, 2, TITLE_MAX),
            validation::validate_text("description", &self.description, 2, DESCRIPTION_MAX),
            validation::validate_phone(&self.phone),
            validation::validate_email(&self.email),
            match self.web {
                Some(ref web) => validation::validate_url("web", web, true),
                None => Ok(()),
            },
            validation::validate_card_image(&self.image),
            validation::validate_address(&self.address),
            match self.biz_number {
                Some(biz_number) => validation::validate_biz_number(biz_number),
                None => Ok(()),
            },
        ])
    }
}
