use bcard_core::{Address, Image, PersonName, User};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Outward representation of a user. The password hash never appears here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: PersonName,
    pub phone: String,
    pub email: String,
    pub image: Image,
    pub address: Address,
    pub is_business: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            phone: user.phone,
            email: user.email,
            image: user.image,
            address: user.address,
            is_business: user.is_business,
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
