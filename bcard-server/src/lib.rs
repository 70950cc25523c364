pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    cards::{
        card_dto::CardDto,
        card_list_response::CardListResponse,
        card_response::CardResponse,
        cards::{
            create_card, delete_card, get_card, list_cards, my_cards, toggle_like, update_card,
        },
        create_card_request::CreateCardRequest,
        like_response::LikeResponse,
        update_card_request::UpdateCardRequest,
    },
    error::ApiError,
    error::FieldError,
    error::Result as ApiResult,
    extractors::identity::AuthIdentity,
    extractors::json::ApiJson,
    users::{
        login_request::LoginRequest,
        register_user_request::RegisterUserRequest,
        token_response::TokenResponse,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{
            delete_user, get_user, list_users, login, register_user, set_business, update_user,
        },
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
