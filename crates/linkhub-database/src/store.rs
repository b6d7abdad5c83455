//! Storage capabilities consumed by the service layer.
//!
//! Implementations must enforce uniqueness themselves: a second insert of
//! an existing username or short code fails with
//! [`ErrorKind::Conflict`](linkhub_core::ErrorKind::Conflict) even when the
//! caller checked for the row first.

use async_trait::async_trait;

use linkhub_core::result::AppResult;
use linkhub_core::types::{LinkId, UserId};
use linkhub_entity::link::{CreateLink, ShortLink};
use linkhub_entity::user::{CreateUser, User};

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a new user. Fails with `Conflict` if the username is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// Persistence for short links.
#[async_trait]
pub trait LinkStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a link by primary key.
    async fn find_by_id(&self, id: LinkId) -> AppResult<Option<ShortLink>>;

    /// Find a link by short code.
    async fn find_by_code(&self, code: &str) -> AppResult<Option<ShortLink>>;

    /// List every link owned by a user, oldest first.
    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<ShortLink>>;

    /// Insert a new link. Fails with `Conflict` if the code is taken.
    async fn create(&self, data: &CreateLink) -> AppResult<ShortLink>;

    /// Delete a link by primary key. Returns `true` if a row was removed.
    async fn delete(&self, id: LinkId) -> AppResult<bool>;
}
