use crate::api::cards::card_dto::CardDto;

use serde::Serialize;

/// Result of a like toggle: the caller's new liked state, the new count,
/// and the card as it stands after the toggle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub liked: bool,
    pub likes_count: i64,
    pub card: CardDto,
}
