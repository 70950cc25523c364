//! Card endpoints: public reads, owner-gated writes, and the like toggle.

use crate::api::cards::{
    card_dto::CardDto, card_list_response::CardListResponse, card_response::CardResponse,
    create_card_request::CreateCardRequest, like_response::LikeResponse,
    update_card_request::UpdateCardRequest,
};
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::{identity::AuthIdentity, json::ApiJson};
use crate::app_state::AppState;

use bcard_auth::policy;
use bcard_core::Card;
use bcard_core::validation::{BIZ_NUMBER_MAX, BIZ_NUMBER_MIN};
use bcard_db::{CardRepository, DbError};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::info;
use rand::Rng;
use uuid::Uuid;

/// How many random bizNumber candidates to try before giving up. The unique
/// index still backstops the winner of any remaining race.
const BIZ_NUMBER_ATTEMPTS: u32 = 10;

/// GET /api/cards - all cards, newest first (public)
pub async fn list_cards(State(state): State<AppState>) -> ApiResult<Json<CardListResponse>> {
    let cards = CardRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(CardListResponse {
        cards: cards.into_iter().map(CardDto::from).collect(),
    }))
}

/// GET /api/cards/{id} - one card (public)
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CardResponse>> {
    let id = Uuid::parse_str(&id)?;

    let card = CardRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Card not found"))?;

    Ok(Json(CardResponse {
        card: CardDto::from(card),
    }))
}

/// GET /api/cards/my-cards - the caller's cards, newest first
pub async fn my_cards(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
) -> ApiResult<Json<CardListResponse>> {
    let cards = CardRepository::new(state.pool.clone())
        .find_by_owner(identity.user_id)
        .await?;

    Ok(Json(CardListResponse {
        cards: cards.into_iter().map(CardDto::from).collect(),
    }))
}

/// POST /api/cards - create a card (business or admin)
pub async fn create_card(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    ApiJson(request): ApiJson<CreateCardRequest>,
) -> ApiResult<Response> {
    if !policy::can_create_card(&identity) {
        return Err(ApiError::forbidden("Business account required"));
    }

    request.validate()?;

    let repo = CardRepository::new(state.pool.clone());

    // A supplied bizNumber collision is the client's problem (409). A
    // generated one retries against the unique index until a free value
    // sticks; the index stays authoritative under concurrent creates.
    let mut attempts = 0;
    let card = loop {
        let biz_number = match request.biz_number {
            Some(n) => n,
            None => generate_biz_number(&repo).await?,
        };

        let card = Card::new(
            request.title.clone(),
            request.subtitle.clone(),
            request.description.clone(),
            request.phone.clone(),
            request.email.clone(),
            request.web.clone(),
            request.image.clone(),
            request.address.clone(),
            biz_number,
            identity.user_id,
        );

        match repo.create(&card).await {
            Ok(()) => break card,
            Err(e @ DbError::Duplicate { .. })
                if request.biz_number.is_none() && attempts < BIZ_NUMBER_ATTEMPTS =>
            {
                attempts += 1;
                log::debug!("Generated bizNumber collided, retrying: {e}");
            }
            Err(e) => return Err(e.into()),
        }
    };

    info!("Card {} created by {}", card.id, identity.user_id);

    Ok((
        StatusCode::CREATED,
        Json(CardResponse {
            card: CardDto::from(card),
        }),
    )
        .into_response())
}

/// PUT /api/cards/{id} - update a card (owner or admin)
pub async fn update_card(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateCardRequest>,
) -> ApiResult<Json<CardResponse>> {
    let id = Uuid::parse_str(&id)?;

    let repo = CardRepository::new(state.pool.clone());

    let mut card = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Card not found"))?;

    if !policy::is_owner_or_admin(&identity, card.owner_id) {
        return Err(ApiError::forbidden("Not your card"));
    }

    request.validate()?;
    request.apply_to(&mut card);

    if !repo.update(&card).await? {
        return Err(ApiError::not_found("Card not found"));
    }

    let card = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Card not found"))?;

    Ok(Json(CardResponse {
        card: CardDto::from(card),
    }))
}

/// DELETE /api/cards/{id} - remove a card (owner or admin)
pub async fn delete_card(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = Uuid::parse_str(&id)?;

    let repo = CardRepository::new(state.pool.clone());

    let card = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Card not found"))?;

    if !policy::is_owner_or_admin(&identity, card.owner_id) {
        return Err(ApiError::forbidden("Not your card"));
    }

    if !repo.delete(id).await? {
        return Err(ApiError::not_found("Card not found"));
    }

    info!("Card {} deleted by {}", id, identity.user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/cards/{id} - toggle the caller's like
///
/// The toggle runs as one transaction in the repository, so two users
/// liking concurrently can never lose each other's like.
pub async fn toggle_like(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<LikeResponse>> {
    let id = Uuid::parse_str(&id)?;

    let repo = CardRepository::new(state.pool.clone());

    let (liked, likes_count) = repo
        .toggle_like(id, identity.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Card not found"))?;

    let card = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Card not found"))?;

    Ok(Json(LikeResponse {
        liked,
        likes_count,
        card: CardDto::from(card),
    }))
}

/// Draw random 7-digit candidates until one is free.
async fn generate_biz_number(repo: &CardRepository) -> ApiResult<i64> {
    for _ in 0..BIZ_NUMBER_ATTEMPTS {
        // The rng is a statement-scoped temporary so it is dropped before
        // the await below (ThreadRng is not Send).
        let candidate = rand::rng().random_range(BIZ_NUMBER_MIN..=BIZ_NUMBER_MAX);

        if !repo.biz_number_exists(candidate).await? {
            return Ok(candidate);
        }
    }

    Err(ApiError::internal("Could not allocate a unique bizNumber"))
}
