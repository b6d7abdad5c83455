//! The authenticated caller of a request.

use serde::{Deserialize, Serialize};

use linkhub_core::types::UserId;

/// Identity established by a verified session token.
///
/// Inserted into request extensions by the session middleware and passed
/// into service methods so every operation knows who is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPrincipal {
    /// The authenticated user's ID.
    pub user_id: UserId,
}

impl AuthPrincipal {
    /// Creates a principal for `user_id`.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
