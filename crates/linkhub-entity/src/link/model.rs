//! Short link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use linkhub_core::types::{LinkId, UserId};

/// A stored mapping from a short code to the original URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ShortLink {
    /// Unique link identifier.
    pub id: LinkId,
    /// The URL the code resolves to. Stored verbatim.
    pub original: String,
    /// Fixed-length alphanumeric short code.
    pub code: String,
    /// The user who created the link.
    pub owner_id: UserId,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Whether `user_id` owns this link.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Data required to insert a short link.
#[derive(Debug, Clone)]
pub struct CreateLink {
    /// The URL to shorten.
    pub original: String,
    /// The candidate short code.
    pub code: String,
    /// The owning user.
    pub owner_id: UserId,
}
