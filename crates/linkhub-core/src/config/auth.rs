//! Authentication configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped in the default configuration.
pub const DEFAULT_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Upper bound for `token_ttl_minutes` (one day).
pub const MAX_TOKEN_TTL_MINUTES: u64 = 24 * 60;

/// Authentication and credential configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Where session tokens travel between client and server.
    #[serde(default)]
    pub token_transport: TokenTransportKind,
    /// Whether the session cookie is marked `Secure` (cookie transport only).
    #[serde(default = "default_true")]
    pub cookie_secure: bool,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum username length.
    #[serde(default = "default_username_max")]
    pub username_max_length: usize,
}

impl AuthConfig {
    /// Whether the signing secret is still the shipped placeholder.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            token_transport: TokenTransportKind::default(),
            cookie_secure: default_true(),
            password_min_length: default_password_min(),
            username_max_length: default_username_max(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .field("token_transport", &self.token_transport)
            .field("cookie_secure", &self.cookie_secure)
            .field("password_min_length", &self.password_min_length)
            .field("username_max_length", &self.username_max_length)
            .finish()
    }
}

/// Session token transport selected per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenTransportKind {
    /// Raw token in the `Authorization` header.
    #[default]
    Header,
    /// Token in a cookie named `token`.
    Cookie,
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

fn default_password_min() -> usize {
    8
}

fn default_username_max() -> usize {
    32
}
