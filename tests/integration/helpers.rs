//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use linkhub_api::{AppState, build_app};
use linkhub_core::config::{AppConfig, ResolveMode, StoreBackend, TokenTransportKind};
use linkhub_core::types::UserId;
use linkhub_database::{MemoryLinkStore, MemoryUserStore};

/// Secret shared by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Backing user store
    pub users: Arc<MemoryUserStore>,
    /// Backing link store
    pub links: Arc<MemoryLinkStore>,
}

/// Baseline config over in-memory storage.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.backend = StoreBackend::Memory;
    config.auth.jwt_secret = TEST_SECRET.to_string();
    config
}

impl TestApp {
    /// Header transport, redirect resolution.
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Cookie transport with secure cookies.
    pub fn with_cookies() -> Self {
        let mut config = test_config();
        config.auth.token_transport = TokenTransportKind::Cookie;
        config.auth.cookie_secure = true;
        Self::with_config(config)
    }

    /// Header transport, JSON payload resolution.
    pub fn with_payload_resolution() -> Self {
        let mut config = test_config();
        config.links.resolve_mode = ResolveMode::Payload;
        Self::with_config(config)
    }

    /// Create a test application with the given config
    pub fn with_config(config: AppConfig) -> Self {
        let users = Arc::new(MemoryUserStore::new());
        let links = Arc::new(MemoryLinkStore::new());

        let state = AppState::new(config.clone(), users.clone(), links.clone());
        let router = build_app(state);

        Self {
            router,
            config,
            users,
            links,
        }
    }

    fn uses_cookies(&self) -> bool {
        self.config.auth.token_transport == TokenTransportKind::Cookie
    }

    /// Register a user, asserting success, and return their ID
    pub async fn register(&self, username: &str, password: &str) -> UserId {
        let response = self
            .request(
                "POST",
                "/register",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );

        serde_json::from_value(response.body["data"]["user"]["id"].clone())
            .expect("user id in register response")
    }

    /// Login and return the session token from the configured transport
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/login",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .session_token(self.uses_cookies())
            .expect("No session token in login response")
    }

    /// Make an HTTP request to the test app, presenting `token` through
    /// the configured transport
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, body_str, token).await
    }

    /// Like [`TestApp::request`] but with an unparsed body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = if self.uses_cookies() {
                req.header(COOKIE, format!("token={token}"))
            } else {
                req.header(AUTHORIZATION, token)
            };
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` when empty
    pub body: Value,
}

impl TestResponse {
    /// The token delivered in the `Authorization` header or `token` cookie.
    pub fn session_token(&self, cookies: bool) -> Option<String> {
        if cookies {
            self.set_cookie().and_then(|c| {
                c.strip_prefix("token=")
                    .and_then(|rest| rest.split(';').next())
                    .map(str::to_string)
            })
        } else {
            self.headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        }
    }

    /// The raw `Set-Cookie` header, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers.get(SET_COOKIE).and_then(|v| v.to_str().ok())
    }

    /// The error message of a failed request.
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}
