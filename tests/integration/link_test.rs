//! Integration tests for short link management and resolution.

mod helpers;

use axum::http::StatusCode;
use axum::http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, LOCATION};
use serde_json::Value;

use helpers::TestApp;

async fn create(app: &TestApp, token: &str, url: &str) -> Value {
    let response = app
        .request(
            "POST",
            "/url",
            Some(serde_json::json!({ "original_url": url })),
            Some(token),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Create failed: {:?}",
        response.body
    );
    response.body["data"]["shortened_url"].clone()
}

/// register → login → create → resolve → delete → resolve again.
async fn full_scenario(app: TestApp) {
    let cookies = app.config.auth.token_transport
        == linkhub_core::config::TokenTransportKind::Cookie;

    app.register("alice", "password1").await;
    let token = app.login("alice", "password1").await;

    let response = app
        .request(
            "POST",
            "/url",
            Some(serde_json::json!({ "original_url": "http://example.com" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.session_token(cookies).is_some());

    let link = &response.body["data"]["shortened_url"];
    assert_eq!(link["original"], "http://example.com");
    let code = link["shortened"].as_str().expect("code").to_string();
    let id = link["id"].as_str().expect("id").to_string();
    assert_eq!(code.len(), 10);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    let resolved = app.request("GET", &format!("/r/{code}"), None, None).await;
    assert_eq!(resolved.status, StatusCode::SEE_OTHER);
    assert_eq!(
        resolved.headers.get(LOCATION).expect("location"),
        "http://example.com"
    );

    let deleted = app
        .request("DELETE", &format!("/url/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["data"]["shortened_url"]["shortened"], code.as_str());
    assert!(deleted.session_token(cookies).is_some());

    let gone = app.request("GET", &format!("/r/{code}"), None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.message(), "URL does not exist");
}

#[tokio::test]
async fn test_full_scenario_with_header_tokens() {
    full_scenario(TestApp::new()).await;
}

#[tokio::test]
async fn test_full_scenario_with_cookie_tokens() {
    full_scenario(TestApp::with_cookies()).await;
}

#[tokio::test]
async fn test_url_is_stored_verbatim() {
    let app = TestApp::new();
    app.register("alice", "password1").await;
    let token = app.login("alice", "password1").await;

    let link = create(&app, &token, "not a url").await;
    assert_eq!(link["original"], "not a url");

    let response = app
        .request(
            "POST",
            "/url",
            Some(serde_json::json!({ "original_url": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_is_scoped_to_owner() {
    let app = TestApp::new();
    app.register("alice", "password1").await;
    app.register("bob", "password2").await;
    let alice = app.login("alice", "password1").await;
    let bob = app.login("bob", "password2").await;

    let first = create(&app, &alice, "http://one.example").await;
    let second = create(&app, &alice, "http://two.example").await;
    create(&app, &bob, "http://bob.example").await;

    let response = app.request("GET", "/url", None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);

    let listed = response.body["data"]["shortened_urls"]
        .as_array()
        .expect("array");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], first["id"]);
    assert_eq!(listed[1]["id"], second["id"]);
}

#[tokio::test]
async fn test_empty_list_is_not_found() {
    let app = TestApp::new();
    app.register("alice", "password1").await;
    let token = app.login("alice", "password1").await;

    let response = app.request("GET", "/url", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "User does not have any URLs");
}

#[tokio::test]
async fn test_delete_other_users_link_is_forbidden() {
    let app = TestApp::new();
    app.register("alice", "password1").await;
    app.register("bob", "password2").await;
    let alice = app.login("alice", "password1").await;
    let bob = app.login("bob", "password2").await;

    let link = create(&app, &alice, "http://google.com").await;
    let id = link["id"].as_str().expect("id");

    let response = app
        .request("DELETE", &format!("/url/{id}"), None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.message(),
        "User is trying to delete other users records"
    );
    assert_eq!(app.links.len(), 1);
}

#[tokio::test]
async fn test_delete_bad_and_unknown_ids() {
    let app = TestApp::new();
    app.register("alice", "password1").await;
    let token = app.login("alice", "password1").await;

    let response = app.request("DELETE", "/url/42", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let unknown = linkhub_core::types::LinkId::new();
    let response = app
        .request("DELETE", &format!("/url/{unknown}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "URL does not exist");
}

#[tokio::test]
async fn test_resolve_unknown_code() {
    let app = TestApp::new();

    let response = app.request("GET", "/r/AAAAAAAAAA", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payload_resolution() {
    let app = TestApp::with_payload_resolution();
    app.register("alice", "password1").await;
    let token = app.login("alice", "password1").await;
    let link = create(&app, &token, "http://example.com").await;
    let code = link["shortened"].as_str().expect("code");

    let response = app.request("GET", &format!("/r/{code}"), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["original_url"], "http://example.com");
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_codes() {
    let app = TestApp::new();
    app.register("alice", "password1").await;
    let token = app.login("alice", "password1").await;

    let creates = (0..20).map(|i| {
        app.request(
            "POST",
            "/url",
            Some(serde_json::json!({ "original_url": format!("http://example.com/{i}") })),
            Some(&token),
        )
    });
    let responses = futures::future::join_all(creates).await;

    let mut codes: Vec<String> = responses
        .iter()
        .map(|r| {
            assert_eq!(r.status, StatusCode::CREATED);
            r.body["data"]["shortened_url"]["shortened"]
                .as_str()
                .expect("code")
                .to_string()
        })
        .collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 20);
    assert_eq!(app.links.len(), 20);
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = TestApp::new();

    let request = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/url")
        .header("Origin", "http://frontend.example")
        .header("Access-Control-Request-Method", "POST")
        .body(axum::body::Body::empty())
        .expect("request");
    let response = app.send(request).await;

    assert_eq!(
        response
            .headers
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allow-origin"),
        "*"
    );
    assert!(response.headers.get(ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
}

#[tokio::test]
async fn test_cors_explicit_origin_allows_credentials() {
    let mut config = helpers::test_config();
    config.server.cors.allowed_origins = vec!["http://frontend.example".to_string()];
    let app = TestApp::with_config(config);

    let request = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/url")
        .header("Origin", "http://frontend.example")
        .header("Access-Control-Request-Method", "DELETE")
        .body(axum::body::Body::empty())
        .expect("request");
    let response = app.send(request).await;

    assert_eq!(
        response
            .headers
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allow-origin"),
        "http://frontend.example"
    );
    assert_eq!(
        response
            .headers
            .get(ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .expect("allow-credentials"),
        "true"
    );
}
