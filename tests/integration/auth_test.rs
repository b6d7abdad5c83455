//! Integration tests for registration, login, and session handling.

mod helpers;

use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use chrono::{Duration, Utc};

use linkhub_auth::jwt::{JwtDecoder, JwtEncoder};

#[tokio::test]
async fn test_register_returns_user_without_password() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "username": "alice", "password": "password1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["user"]["username"], "alice");
    assert!(response.body["data"]["user"].get("password_hash").is_none());
    assert_eq!(app.users.len(), 1);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = helpers::TestApp::new();
    app.register("alice", "password1").await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "username": "alice", "password": "another99" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "DUPLICATE_USERNAME");
    assert_eq!(response.message(), "Username already exists");
}

#[tokio::test]
async fn test_register_validation() {
    let app = helpers::TestApp::new();

    let short_password = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "username": "bob", "password": "short" })),
            None,
        )
        .await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(short_password.body["error"], "VALIDATION");

    let long_username = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "username": "a".repeat(33), "password": "password1" })),
            None,
        )
        .await;
    assert_eq!(long_username.status, StatusCode::BAD_REQUEST);

    let missing_field = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "username": "bob" })),
            None,
        )
        .await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);

    assert!(app.users.is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app
        .raw_request("POST", "/register", "{not json".to_string(), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_login_success_returns_token() {
    let app = helpers::TestApp::new();
    let user_id = app.register("alice", "password1").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "alice", "password": "password1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user"]["username"], "alice");

    let token = response.session_token(false).expect("authorization header");
    assert_eq!(response.body["data"]["token"], token.as_str());

    let claims = JwtDecoder::new(&app.config.auth)
        .decode(&token)
        .expect("valid token");
    assert_eq!(claims.user_id(), user_id);
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = helpers::TestApp::new();
    app.register("alice", "password1").await;

    let wrong_password = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "alice", "password": "password2" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "mallory", "password": "password1" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.message(), "Invalid credentials");
    assert_eq!(wrong_password.body, unknown_user.body);
    assert!(wrong_password.headers.get(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/url", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Unauthorized");

    let response = app.request("GET", "/url", None, Some("garbage")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Unauthorized");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = helpers::TestApp::new();
    let user_id = app.register("alice", "password1").await;

    let stale = JwtEncoder::new(&app.config.auth)
        .issue_at(user_id, Utc::now() - Duration::minutes(10))
        .expect("issue");

    let response = app.request("GET", "/url", None, Some(&stale.token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Unauthorized");
}

#[tokio::test]
async fn test_bearer_prefix_is_accepted() {
    let app = helpers::TestApp::new();
    app.register("alice", "password1").await;
    let token = app.login("alice", "password1").await;

    let response = app
        .request(
            "POST",
            "/url",
            Some(serde_json::json!({ "original_url": "http://a.example" })),
            Some(&format!("Bearer {token}")),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_success_slides_token_expiry() {
    let app = helpers::TestApp::new();
    let user_id = app.register("alice", "password1").await;

    // Four minutes old: still valid, one minute left.
    let aging = JwtEncoder::new(&app.config.auth)
        .issue_at(user_id, Utc::now() - Duration::minutes(4))
        .expect("issue");

    let response = app
        .request(
            "POST",
            "/url",
            Some(serde_json::json!({ "original_url": "http://example.com" })),
            Some(&aging.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let refreshed = response.session_token(false).expect("refreshed token");
    let claims = JwtDecoder::new(&app.config.auth)
        .decode(&refreshed)
        .expect("valid refreshed token");
    assert_eq!(claims.user_id(), user_id);
    assert!(claims.expires_at() > aging.expires_at + Duration::minutes(3));
}

#[tokio::test]
async fn test_failed_requests_do_not_refresh() {
    let app = helpers::TestApp::new();
    app.register("alice", "password1").await;
    let token = app.login("alice", "password1").await;

    // No links yet: 404.
    let response = app.request("GET", "/url", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.headers.get(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn test_cookie_login_sets_secure_cookie() {
    let app = helpers::TestApp::with_cookies();
    app.register("alice", "password1").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "alice", "password": "password1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].get("token").is_none());
    assert!(response.headers.get(AUTHORIZATION).is_none());

    let cookie = response.set_cookie().expect("set-cookie");
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=None"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_cookie_mode_ignores_authorization_header() {
    let app = helpers::TestApp::with_cookies();
    app.register("alice", "password1").await;
    let token = app.login("alice", "password1").await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/url")
        .header(AUTHORIZATION, token)
        .body(axum::body::Body::empty())
        .expect("request");

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
