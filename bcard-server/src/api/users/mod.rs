pub mod login_request;
pub mod register_user_request;
pub mod token_response;
pub mod update_user_request;
pub mod user_dto;
pub mod user_list_response;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
