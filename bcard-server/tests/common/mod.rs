//! Shared helpers for API integration tests: an in-memory app instance and
//! request plumbing around `tower::ServiceExt::oneshot`.

// Each integration test binary compiles its own copy of this module and
// only uses a subset of the helpers.
#![allow(dead_code)]

use bcard_auth::TokenService;
use bcard_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes!!";

pub async fn test_app() -> (Router, AppState) {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    // In-memory databases exist per connection, so the pool must stay at one
    let pool: SqlitePool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory database");

    bcard_db::MIGRATOR.run(&pool).await.expect("migrations");

    let state = AppState {
        pool,
        tokens: Arc::new(TokenService::with_hs256(TEST_SECRET)),
        token_ttl: chrono::Duration::days(7),
        started_at: std::time::Instant::now(),
    };

    (build_router(state.clone()), state)
}

/// Send one request and decode the JSON body (Null for empty bodies).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };

    (status, value)
}

pub fn register_payload(email: &str, is_business: bool) -> Value {
    json!({
        "name": { "first": "Dana", "last": "Levy" },
        "phone": "050-1234567",
        "email": email,
        "password": "Passw0rd",
        "address": {
            "country": "Israel",
            "city": "Tel Aviv",
            "street": "Herzl",
            "houseNumber": 12
        },
        "isBusiness": is_business
    })
}

pub fn card_payload(title: &str) -> Value {
    json!({
        "title": title,
        "subtitle": "Plumbing around the clock",
        "description": "Emergency plumbing for homes and offices",
        "phone": "050-7654321",
        "email": "contact@example.com",
        "image": {
            "url": "https://example.com/card.png",
            "alt": "storefront"
        },
        "address": {
            "country": "Israel",
            "city": "Haifa",
            "street": "Allenby",
            "houseNumber": 3
        }
    })
}

/// Register an account and return its id.
pub async fn register(app: &Router, email: &str, is_business: bool) -> Uuid {
    let (status, body) = send(
        app,
        "POST",
        "/api/users",
        None,
        Some(register_payload(email, is_business)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");

    body["user"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("user id")
}

/// Login and return the bearer token.
pub async fn login(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({ "email": email, "password": "Passw0rd" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");

    body["token"].as_str().expect("token").to_string()
}

/// Flip the admin flag directly; registration can never mint an admin, so
/// tests promote through the database the way an operator would.
pub async fn promote_to_admin(state: &AppState, user_id: Uuid) {
    sqlx::query("UPDATE users SET is_admin = 1 WHERE id = ?")
        .bind(user_id.to_string())
        .execute(&state.pool)
        .await
        .expect("promote");
}

/// Register, promote, and login an admin in one step.
pub async fn admin_token(app: &Router, state: &AppState, email: &str) -> String {
    let id = register(app, email, false).await;
    promote_to_admin(state, id).await;
    login(app, email).await
}

/// Register a business user, login, and create a card; returns
/// (owner token, card id).
pub async fn create_card_fixture(app: &Router, email: &str, title: &str) -> (String, Uuid) {
    register(app, email, true).await;
    let token = login(app, email).await;

    let (status, body) = send(
        app,
        "POST",
        "/api/cards",
        Some(&token),
        Some(card_payload(title)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create card failed: {body}");

    let card_id = body["card"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("card id");

    (token, card_id)
}
