//! User account endpoints: registration, login, and profile management.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::{identity::AuthIdentity, json::ApiJson};
use crate::api::users::{
    login_request::LoginRequest, register_user_request::RegisterUserRequest,
    token_response::TokenResponse, update_user_request::UpdateUserRequest, user_dto::UserDto,
    user_list_response::UserListResponse, user_response::UserResponse,
};
use crate::app_state::AppState;

use bcard_auth::{hash_password, policy, verify_password};
use bcard_core::User;
use bcard_db::UserRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::info;
use uuid::Uuid;

/// POST /api/users - register a new account
pub async fn register_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterUserRequest>,
) -> ApiResult<Response> {
    request.validate()?;

    let repo = UserRepository::new(state.pool.clone());
    let email = request.email.to_lowercase();

    // Friendly pre-check; the unique index is the authoritative backstop
    // against a concurrent registration racing past this.
    if repo.find_by_email(&email).await?.is_some() {
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = hash_password(&request.password)
        .map_err(|e| ApiError::internal(format!("Password hashing failed: {e}")))?;

    let user = User::new(
        request.name.clone(),
        request.phone.clone(),
        email,
        password_hash,
        request.image_or_default(),
        request.address.clone(),
        request.is_business,
    );

    repo.create(&user).await?;

    info!("Registered user {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: UserDto::from(user),
        }),
    )
        .into_response())
}

/// POST /api/users/login - exchange credentials for a bearer token
///
/// Unknown email and wrong password produce byte-identical 401 responses;
/// the login surface must not leak which emails are registered.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_email(&request.email.to_lowercase())
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(ApiError::invalid_credentials());
    }

    let token = state
        .tokens
        .issue(user.id, user.is_business, user.is_admin, state.token_ttl)
        .map_err(|e| ApiError::internal(format!("Token issuance failed: {e}")))?;

    info!("User {} logged in", user.id);

    Ok(Json(TokenResponse { token }))
}

/// GET /api/users - list all accounts (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
) -> ApiResult<Json<UserListResponse>> {
    if !policy::can_list_all_users(&identity) {
        return Err(ApiError::forbidden("Admin only"));
    }

    let users = UserRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/users/{id} - fetch one account (self or admin)
pub async fn get_user(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let id = Uuid::parse_str(&id)?;

    if !policy::is_self_or_admin(&identity, id) {
        return Err(ApiError::forbidden("Not your account"));
    }

    let user = UserRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}

/// PUT /api/users/{id} - replace the profile (self or admin)
pub async fn update_user(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let id = Uuid::parse_str(&id)?;

    if !policy::is_self_or_admin(&identity, id) {
        return Err(ApiError::forbidden("Not your account"));
    }

    request.validate()?;

    let user = UserRepository::new(state.pool.clone())
        .update_profile(id, &request.name, &request.phone, &request.image, &request.address)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}

/// PATCH /api/users/{id} - set the business flag
///
/// The body must be `{"isBusiness": <bool>}`; anything else is a 400. The
/// flag is set to the supplied value rather than toggled, so retried
/// requests are idempotent.
pub async fn set_business(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<serde_json::Value>,
) -> ApiResult<Json<UserResponse>> {
    let id = Uuid::parse_str(&id)?;

    if !policy::is_self_or_admin(&identity, id) {
        return Err(ApiError::forbidden("Not your account"));
    }

    let is_business = body
        .get("isBusiness")
        .and_then(serde_json::Value::as_bool)
        .ok_or_else(|| ApiError::bad_request("isBusiness must be a boolean"))?;

    let user = UserRepository::new(state.pool.clone())
        .set_business(id, is_business)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    info!("User {} business flag set to {}", id, is_business);

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}

/// DELETE /api/users/{id} - remove an account (self or admin)
pub async fn delete_user(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = Uuid::parse_str(&id)?;

    if !policy::is_self_or_admin(&identity, id) {
        return Err(ApiError::forbidden("Not your account"));
    }

    let deleted = UserRepository::new(state.pool.clone()).delete(id).await?;
    if !deleted {
        return Err(ApiError::not_found("User not found"));
    }

    info!("User {} deleted", id);

    Ok(StatusCode::NO_CONTENT)
}
