pub mod card_dto;
pub mod card_list_response;
pub mod card_response;
#[allow(clippy::module_inception)]
pub mod cards;
pub mod create_card_request;
pub mod like_response;
pub mod update_card_request;
