use crate::api::error::{ApiError, Result as ApiResult};

use bcard_core::{Address, Card, Image, validation};
use bcard_core::validation::{DESCRIPTION_MAX, TITLE_MAX};

use serde::Deserialize;

/// Partial card update: only the supplied fields change.
///
/// `bizNumber`, `ownerId`, and `likes` are not deserialized at all, so they
/// stay immutable through this endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub web: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl UpdateCardRequest {
    pub fn validate(&self) -> ApiResult<()> {
        ApiError::collect_validation([
            match self.title {
                Some(ref title) => validation::validate_text("title", title, 2, TITLE_MAX),
                None => Ok(()),
            },
            match self.subtitle {
                Some(ref subtitle) => validation::validate_text("subtitle", subtitle, 2, TITLE_MAX),
                None => Ok(()),
            },
            match self.description {
                Some(ref description) => {
                    validation::validate_text("description", description, 2, DESCRIPTION_MAX)
                }
                None => Ok(()),
            },
            match self.phone {
                Some(ref phone) => validation::validate_phone(phone),
                None => Ok(()),
            },
            match self.email {
                Some(ref email) => validation::validate_email(email),
                None => Ok(()),
            },
            match self.web {
                Some(ref web) => validation::validate_url("web", web, true),
                None => Ok(()),
            },
            match self.image {
                Some(ref image) => validation::validate_card_image(image),
                None => Ok(()),
            },
            match self.address {
                Some(ref address) => validation::validate_address(address),
                None => Ok(()),
            },
        ])
    }

    /// Overlay the supplied fields onto an existing card.
    pub fn apply_to(&self, card: &mut Card) {
        if let Some(ref title) = self.title {
            card.title = title.clone();
        }
        if let Some(ref subtitle) = self.subtitle {
            card.subtitle = subtitle.clone();
        }
        if let Some(ref description) = self.description {
            card.description = description.clone();
        }
        if let Some(ref phone) = self.phone {
            card.phone = phone.clone();
        }
        if let Some(ref email) = self.email {
            card.email = email.to_lowercase();
        }
        if let Some(ref web) = self.web {
            card.web = Some(web.clone());
        }
        if let Some(ref image) = self.image {
            card.image = image.clone();
        }
        if let Some(ref address) = self.address {
            card.address = address.clone();
        }
    }
}
