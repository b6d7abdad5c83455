//! In-memory short link store.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use linkhub_core::error::AppError;
use linkhub_core::result::AppResult;
use linkhub_core::types::{LinkId, UserId};
use linkhub_entity::link::{CreateLink, ShortLink};

use crate::store::LinkStore;

#[derive(Debug, Clone)]
struct StoredLink {
    /// Insertion order, used to list links oldest first.
    seq: u64,
    link: ShortLink,
}

/// Process-local short link store.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: DashMap<LinkId, StoredLink>,
    /// Code index; the entry lock doubles as the uniqueness constraint.
    codes: DashMap<String, LinkId>,
    next_seq: AtomicU64,
}

impl MemoryLinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the store holds no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn find_by_id(&self, id: LinkId) -> AppResult<Option<ShortLink>> {
        Ok(self.links.get(&id).map(|s| s.link.clone()))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<ShortLink>> {
        Ok(self
            .codes
            .get(code)
            .and_then(|id| self.links.get(id.value()).map(|s| s.link.clone())))
    }

    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<ShortLink>> {
        let mut owned: Vec<StoredLink> = self
            .links
            .iter()
            .filter(|entry| entry.link.owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();
        owned.sort_by_key(|s| s.seq);
        Ok(owned.into_iter().map(|s| s.link).collect())
    }

    async fn create(&self, data: &CreateLink) -> AppResult<ShortLink> {
        match self.codes.entry(data.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Short code '{}' already exists",
                data.code
            ))),
            Entry::Vacant(slot) => {
                let link = ShortLink {
                    id: LinkId::new(),
                    original: data.original.clone(),
                    code: data.code.clone(),
                    owner_id: data.owner_id,
                    created_at: Utc::now(),
                };
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                self.links.insert(
                    link.id,
                    StoredLink {
                        seq,
                        link: link.clone(),
                    },
                );
                slot.insert(link.id);
                Ok(link)
            }
        }
    }

    async fn delete(&self, id: LinkId) -> AppResult<bool> {
        match self.links.remove(&id) {
            Some((_, stored)) => {
                self.codes.remove(&stored.link.code);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
