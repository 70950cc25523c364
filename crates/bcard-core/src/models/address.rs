use serde::{Deserialize, Serialize};

/// Postal address shared by users and cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub state: Option<String>,
    pub country: String,
    pub city: String,
    pub street: String,
    pub house_number: i64,
    #[serde(default)]
    pub zip: Option<i64>,
}
