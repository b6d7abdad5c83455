//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, RegisterResponse};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::middleware::session::TokenTransport;
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<RegisterResponse>>)> {
    let user = state
        .account_service
        .register(&req.username, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Successfully signed up!",
            RegisterResponse { user: user.into() },
        )),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<(HeaderMap, Json<ApiResponse<LoginResponse>>)> {
    let result = state
        .account_service
        .login(&req.username, &req.password)
        .await?;

    let mut headers = HeaderMap::new();
    state.transport.attach(&mut headers, &result.session)?;

    let token = match state.transport {
        TokenTransport::Header => Some(result.session.token),
        TokenTransport::Cookie { .. } => None,
    };

    Ok((
        headers,
        Json(ApiResponse::ok(
            "Successfully signed in!",
            LoginResponse {
                user: result.user.into(),
                token,
                expires_at: result.session.expires_at,
            },
        )),
    ))
}
