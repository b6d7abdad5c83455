//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
///
/// Length policy is enforced by the account service from configuration;
/// this only rejects missing fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Short link creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL to shorten, stored verbatim.
    #[validate(length(min = 1, message = "URL is required"))]
    pub original_url: String,
}
