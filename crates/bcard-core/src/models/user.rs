//! User account entity.

use crate::{Address, Image, PersonName};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. `password_hash` is never serialized; every outward
/// representation of a user goes through a DTO that omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: PersonName,
    pub phone: String,
    /// Unique across all users, stored lowercased
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub image: Image,
    pub address: Address,
    pub is_business: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new regular user. Registration can never produce an admin.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: PersonName,
        phone: String,
        email: String,
        password_hash: String,
        image: Image,
        address: Address,
        is_business: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            email: email.to_lowercase(),
            password_hash,
            image,
            address,
            is_business,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }
}
