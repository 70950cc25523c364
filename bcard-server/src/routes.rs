use crate::api::cards::cards::{
    create_card, delete_card, get_card, list_cards, my_cards, toggle_like, update_card,
};
use crate::api::users::users::{
    delete_user, get_user, list_users, login, register_user, set_business, update_user,
};
use crate::app_state::AppState;
use crate::health::health;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the full application router.
///
/// Card reads are public; everything else behind `/api` authenticates via
/// the bearer-token extractor on each handler.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/users", post(register_user).get(list_users))
        .route("/api/users/login", post(login))
        .route(
            "/api/users/{id}",
            get(get_user)
                .put(update_user)
                .patch(set_business)
                .delete(delete_user),
        )
        .route("/api/cards", get(list_cards).post(create_card))
        .route("/api/cards/my-cards", get(my_cards))
        .route(
            "/api/cards/{id}",
            get(get_card)
                .put(update_card)
                .patch(toggle_like)
                .delete(delete_card),
        )
        .layer(cors)
        .with_state(state)
}
