use crate::api::cards::card_dto::CardDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub card: CardDto,
}
