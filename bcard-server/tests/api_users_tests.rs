mod common;

use common::{
    admin_token, login, promote_to_admin, register, register_payload, send, test_app,
};

use bcard_auth::TokenService;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn given_valid_payload_when_registering_then_user_returned_without_password() {
    let (app, _state) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        None,
        Some(register_payload("Dana.Levy@Example.com", false)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    // Stored and returned lowercased
    assert_eq!(body["user"]["email"], "dana.levy@example.com");
    assert_eq!(body["user"]["isBusiness"], false);
    assert_eq!(body["user"]["isAdmin"], false);
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn given_is_admin_in_payload_when_registering_then_flag_is_ignored() {
    let (app, _state) = test_app().await;

    let mut payload = register_payload("dana@example.com", false);
    payload["isAdmin"] = json!(true);

    let (status, body) = send(&app, "POST", "/api/users", None, Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["isAdmin"], false);
}

#[tokio::test]
async fn given_taken_email_when_registering_then_conflict() {
    let (app, _state) = test_app().await;
    register(&app, "dana@example.com", false).await;

    // Same email with different case still collides
    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        None,
        Some(register_payload("DANA@example.com", true)),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn given_invalid_fields_when_registering_then_details_name_each_field() {
    let (app, _state) = test_app().await;

    let mut payload = register_payload("not-an-email", false);
    payload["password"] = json!("short");
    payload["phone"] = json!("abc");

    let (status, body) = send(&app, "POST", "/api/users", None, Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let fields: Vec<&str> = body["error"]["details"]
        .as_array()
        .expect("details")
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
    assert!(fields.contains(&"phone"));
}

#[tokio::test]
async fn given_unknown_email_and_wrong_password_when_logging_in_then_responses_are_identical() {
    let (app, _state) = test_app().await;
    register(&app, "dana@example.com", false).await;

    let (unknown_status, unknown_body) = send(
        &app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({ "email": "nobody@example.com", "password": "Passw0rd" })),
    )
    .await;

    let (wrong_status, wrong_body) = send(
        &app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({ "email": "dana@example.com", "password": "WrongPw1" })),
    )
    .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    // No user-enumeration oracle
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(unknown_body["error"]["message"], "Invalid email or password");
}

#[tokio::test]
async fn given_mixed_case_email_when_logging_in_then_token_is_issued() {
    let (app, _state) = test_app().await;
    let user_id = register(&app, "dana@example.com", false).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({ "email": "DANA@Example.com", "password": "Passw0rd" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The token works against a protected endpoint
    let token = body["token"].as_str().expect("token");
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/users/{user_id}"),
        Some(token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user_id.to_string());
}

#[tokio::test]
async fn given_no_token_when_fetching_user_then_unauthorized() {
    let (app, _state) = test_app().await;
    let user_id = register(&app, "dana@example.com", false).await;

    let (status, body) = send(&app, "GET", &format!("/api/users/{user_id}"), None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn given_token_signed_with_wrong_secret_when_fetching_user_then_unauthorized() {
    let (app, _state) = test_app().await;
    let user_id = register(&app, "dana@example.com", false).await;

    let forged = TokenService::with_hs256(b"wrong-secret-that-is-32-bytes-long")
        .issue(user_id, false, true, chrono::Duration::days(7))
        .expect("forged token");

    let (status, _body) = send(
        &app,
        "GET",
        &format!("/api/users/{user_id}"),
        Some(&forged),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_expired_and_forged_tokens_then_the_401_bodies_are_identical() {
    let (app, state) = test_app().await;
    let user_id = register(&app, "dana@example.com", false).await;

    // Expired beyond the verifier's clock-skew leeway
    let expired = state
        .tokens
        .issue(user_id, false, false, chrono::Duration::seconds(-120))
        .expect("expired token");
    let forged = TokenService::with_hs256(b"wrong-secret-that-is-32-bytes-long")
        .issue(user_id, false, false, chrono::Duration::days(7))
        .expect("forged token");

    let uri = format!("/api/users/{user_id}");
    let (expired_status, expired_body) = send(&app, "GET", &uri, Some(&expired), None).await;
    let (forged_status, forged_body) = send(&app, "GET", &uri, Some(&forged), None).await;

    assert_eq!(expired_status, StatusCode::UNAUTHORIZED);
    assert_eq!(forged_status, StatusCode::UNAUTHORIZED);
    assert_eq!(expired_body, forged_body);
}

#[tokio::test]
async fn given_another_users_id_when_fetching_then_forbidden_unless_admin() {
    let (app, state) = test_app().await;
    let dana = register(&app, "dana@example.com", false).await;
    register(&app, "noa@example.com", false).await;
    let noa_token = login(&app, "noa@example.com").await;

    let (status, _body) = send(
        &app,
        "GET",
        &format!("/api/users/{dana}"),
        Some(&noa_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = admin_token(&app, &state, "admin@example.com").await;
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/users/{dana}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], dana.to_string());
}

#[tokio::test]
async fn given_malformed_id_when_fetching_user_then_bad_request() {
    let (app, _state) = test_app().await;
    register(&app, "dana@example.com", false).await;
    let token = login(&app, "dana@example.com").await;

    let (status, body) = send(&app, "GET", "/api/users/not-a-uuid", Some(&token), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn given_non_admin_when_listing_users_then_forbidden() {
    let (app, state) = test_app().await;
    register(&app, "dana@example.com", false).await;
    let token = login(&app, "dana@example.com").await;

    let (status, _body) = send(&app, "GET", "/api/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = admin_token(&app, &state, "admin@example.com").await;
    let (status, body) = send(&app, "GET", "/api/users", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().expect("users").len(), 2);
}

#[tokio::test]
async fn given_profile_update_when_putting_then_immutable_fields_are_ignored() {
    let (app, _state) = test_app().await;
    let user_id = register(&app, "dana@example.com", false).await;
    let token = login(&app, "dana@example.com").await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/users/{user_id}"),
        Some(&token),
        Some(json!({
            "name": { "first": "Daniela", "last": "Levy" },
            "phone": "052-9999999",
            "image": { "url": "", "alt": "" },
            "address": {
                "country": "Israel",
                "city": "Jerusalem",
                "street": "Jaffa",
                "houseNumber": 7
            },
            // Ignored: not part of the profile surface
            "email": "new@example.com",
            "password": "Hacked99",
            "isAdmin": true
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"]["first"], "Daniela");
    assert_eq!(body["user"]["address"]["city"], "Jerusalem");
    assert_eq!(body["user"]["email"], "dana@example.com");
    assert_eq!(body["user"]["isAdmin"], false);

    // Old password still logs in
    login(&app, "dana@example.com").await;
}

#[tokio::test]
async fn given_non_owner_when_putting_profile_then_forbidden() {
    let (app, _state) = test_app().await;
    let dana = register(&app, "dana@example.com", false).await;
    register(&app, "noa@example.com", false).await;
    let noa_token = login(&app, "noa@example.com").await;

    let (status, _body) = send(
        &app,
        "PUT",
        &format!("/api/users/{dana}"),
        Some(&noa_token),
        Some(json!({
            "name": { "first": "Evil", "last": "Twin" },
            "phone": "052-0000000",
            "image": { "url": "", "alt": "" },
            "address": {
                "country": "Israel",
                "city": "Eilat",
                "street": "Coral",
                "houseNumber": 1
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn given_boolean_body_when_patching_business_flag_then_value_is_set() {
    let (app, _state) = test_app().await;
    let user_id = register(&app, "dana@example.com", false).await;
    let token = login(&app, "dana@example.com").await;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/users/{user_id}"),
        Some(&token),
        Some(json!({ "isBusiness": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["isBusiness"], true);

    // Setting the same value again is idempotent, not a toggle
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/users/{user_id}"),
        Some(&token),
        Some(json!({ "isBusiness": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["isBusiness"], true);
}

#[tokio::test]
async fn given_non_boolean_body_when_patching_business_flag_then_bad_request() {
    let (app, _state) = test_app().await;
    let user_id = register(&app, "dana@example.com", false).await;
    let token = login(&app, "dana@example.com").await;

    for body in [json!({ "isBusiness": "yes" }), json!({}), json!({ "isBusiness": 1 })] {
        let (status, response) = send(
            &app,
            "PATCH",
            &format!("/api/users/{user_id}"),
            Some(&token),
            Some(body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn given_admin_when_deleting_user_then_no_content_and_absent_afterwards() {
    let (app, state) = test_app().await;
    let dana = register(&app, "dana@example.com", false).await;
    let admin = admin_token(&app, &state, "admin@example.com").await;

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/users/{dana}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _body) = send(
        &app,
        "GET",
        &format!("/api/users/{dana}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again reports absence
    let (status, _body) = send(
        &app,
        "DELETE",
        &format!("/api/users/{dana}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_promotion_after_login_then_old_token_keeps_old_role() {
    let (app, state) = test_app().await;
    let dana = register(&app, "dana@example.com", false).await;
    let old_token = login(&app, "dana@example.com").await;

    promote_to_admin(&state, dana).await;

    // No revocation: role changes only reach tokens issued afterwards
    let (status, _body) = send(&app, "GET", "/api/users", Some(&old_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let new_token = login(&app, "dana@example.com").await;
    let (status, _body) = send(&app, "GET", "/api/users", Some(&new_token), None).await;
    assert_eq!(status, StatusCode::OK);
}
