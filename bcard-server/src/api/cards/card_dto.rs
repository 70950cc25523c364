use bcard_core::{Address, Card, Image};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Outward representation of a card.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
    pub image: Image,
    pub address: Address,
    pub biz_number: i64,
    pub owner_id: Uuid,
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Card> for CardDto {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            title: card.title,
            subtitle: card.subtitle,
            description: card.description,
            phone: card.phone,
            email: card.email,
            web: card.web,
            image: card.image,
            address: card.address,
            biz_number: card.biz_number,
            owner_id: card.owner_id,
            likes: card.likes,
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}
