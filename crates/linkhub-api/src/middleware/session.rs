//! Session verification and sliding token refresh.
//!
//! Tokens travel either in the `Authorization` header or in a cookie named
//! `token`, chosen once per deployment. Every successful response on a
//! protected route carries a freshly issued token through the same channel.

use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::OffsetDateTime;
use tracing::{debug, error};

use linkhub_auth::jwt::SessionToken;
use linkhub_core::config::{AuthConfig, TokenTransportKind};
use linkhub_core::error::AppError;
use linkhub_service::context::AuthPrincipal;

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the session cookie.
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Where session tokens are read from and written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTransport {
    /// Raw token in the `Authorization` header, optionally `Bearer`-prefixed.
    Header,
    /// HttpOnly cookie named [`TOKEN_COOKIE_NAME`].
    Cookie {
        /// Emit `Secure; SameSite=None` instead of `SameSite=Lax`.
        secure: bool,
    },
}

impl TokenTransport {
    /// Selects the transport configured for this deployment.
    pub fn from_config(config: &AuthConfig) -> Self {
        match config.token_transport {
            TokenTransportKind::Header => Self::Header,
            TokenTransportKind::Cookie => Self::Cookie {
                secure: config.cookie_secure,
            },
        }
    }

    /// Reads the presented token, if any.
    pub fn extract(&self, headers: &HeaderMap) -> Option<String> {
        let token = match self {
            Self::Header => {
                // Strip the scheme before trimming so a bare "Bearer " stays empty.
                let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim_start();
                value.strip_prefix("Bearer ").unwrap_or(value).trim().to_string()
            }
            Self::Cookie { .. } => CookieJar::from_headers(headers)
                .get(TOKEN_COOKIE_NAME)?
                .value()
                .to_string(),
        };

        (!token.is_empty()).then_some(token)
    }

    /// Writes `session` onto outgoing response headers.
    pub fn attach(&self, headers: &mut HeaderMap, session: &SessionToken) -> Result<(), AppError> {
        match self {
            Self::Header => {
                let value = HeaderValue::from_str(&session.token)
                    .map_err(|e| AppError::internal(format!("Invalid token header: {e}")))?;
                headers.insert(AUTHORIZATION, value);
            }
            Self::Cookie { secure } => {
                let expires = OffsetDateTime::from_unix_timestamp(session.expires_at.timestamp())
                    .map_err(|e| AppError::internal(format!("Invalid token expiry: {e}")))?;
                let same_site = if *secure { SameSite::None } else { SameSite::Lax };

                let cookie = Cookie::build((TOKEN_COOKIE_NAME, session.token.clone()))
                    .path("/")
                    .http_only(true)
                    .same_site(same_site)
                    .secure(*secure)
                    .expires(expires)
                    .build();

                let value = HeaderValue::from_str(&cookie.to_string())
                    .map_err(|e| AppError::internal(format!("Invalid cookie header: {e}")))?;
                headers.append(SET_COOKIE, value);
            }
        }
        Ok(())
    }
}

/// Rejects requests without a valid session and refreshes it on success.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = state
        .transport
        .extract(request.headers())
        .ok_or_else(|| {
            debug!(path = %request.uri().path(), "No session token presented");
            AppError::invalid_token()
        })?;

    let claims = state.jwt_decoder.decode(&token)?;
    let principal = AuthPrincipal::new(claims.user_id());
    request.extensions_mut().insert(principal);

    let mut response = next.run(request).await;

    if response.status().is_success() {
        let refreshed = state
            .jwt_encoder
            .issue(principal.user_id)
            .and_then(|session| state.transport.attach(response.headers_mut(), &session));
        if let Err(e) = refreshed {
            error!(user_id = %principal.user_id, error = %e, "Failed to refresh session token");
        }
    }

    Ok(response)
}
