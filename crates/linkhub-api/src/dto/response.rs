//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use linkhub_core::types::{LinkId, UserId};
use linkhub_entity::link::ShortLink;
use linkhub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Public view of a user. Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Username.
    pub username: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// The new account.
    pub user: UserResponse,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated account.
    pub user: UserResponse,
    /// Session token. Omitted when tokens travel in an HttpOnly cookie.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Session token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Public view of a short link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResponse {
    /// Link ID, used for deletion.
    pub id: LinkId,
    /// The original URL.
    pub original: String,
    /// The short code.
    pub shortened: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            original: link.original,
            shortened: link.code,
            created_at: link.created_at,
        }
    }
}

/// A single link, as returned by create and delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenedUrlResponse {
    /// The link.
    pub shortened_url: LinkResponse,
}

/// All of a user's links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenedUrlsResponse {
    /// Links, oldest first.
    pub shortened_urls: Vec<LinkResponse>,
}

/// Resolution result when redirects are disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    /// The URL the code points to.
    pub original_url: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
