//! In-memory user store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use linkhub_core::error::AppError;
use linkhub_core::result::AppResult;
use linkhub_core::types::UserId;
use linkhub_entity::user::{CreateUser, User};

use crate::store::UserStore;

/// Process-local user store.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<UserId, User>,
    /// Username index; the entry lock doubles as the uniqueness constraint.
    usernames: DashMap<String, UserId>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .usernames
            .get(username)
            .and_then(|id| self.users.get(id.value()).map(|u| u.value().clone())))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        match self.usernames.entry(data.username.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Username '{}' already exists",
                data.username
            ))),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let user = User {
                    id: UserId::new(),
                    username: data.username.clone(),
                    password_hash: data.password_hash.clone(),
                    created_at: now,
                    updated_at: now,
                };
                self.users.insert(user.id, user.clone());
                slot.insert(user.id);
                Ok(user)
            }
        }
    }
}
