//! Business-card listing entity.

use crate::{Address, Image};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published business-card listing.
///
/// `owner_id` is fixed at creation time to the authenticated creator and
/// drives ownership-based authorization. `biz_number` is unique across all
/// cards; when the client omits it, the service generates a random 7-digit
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub web: Option<String>,
    pub image: Image,
    pub address: Address,
    pub biz_number: i64,
    pub owner_id: Uuid,
    /// Ids of users who liked this card
    #[serde(default)]
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        subtitle: String,
        description: String,
        phone: String,
        email: String,
        web: Option<String>,
        image: Image,
        address: Address,
        biz_number: i64,
        owner_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            subtitle,
            description,
            phone,
            email: email.to_lowercase(),
            web,
            image,
            address,
            biz_number,
            owner_id,
            likes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn liked_by(&self, user_id: Uuid) -> bool {
        self.likes.contains(&user_id)
    }
}
