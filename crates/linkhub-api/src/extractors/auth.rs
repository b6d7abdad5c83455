//! `AuthUser` extractor: reads the principal the session middleware verified.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use linkhub_core::error::AppError;
use linkhub_service::context::AuthPrincipal;

use crate::error::ApiError;

/// Authenticated caller available in handlers behind the session middleware.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub AuthPrincipal);

impl AuthUser {
    /// Returns the inner `AuthPrincipal`.
    pub fn principal(&self) -> &AuthPrincipal {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = AuthPrincipal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthPrincipal>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| ApiError(AppError::invalid_token()))
    }
}
