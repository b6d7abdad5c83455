//! Short link creation, listing, deletion, and resolution.

use std::sync::Arc;

use tracing::{info, warn};

use linkhub_core::error::AppError;
use linkhub_core::types::LinkId;
use linkhub_database::store::LinkStore;
use linkhub_entity::link::{CreateLink, ShortLink};

use crate::context::AuthPrincipal;

use super::code::ShortCodeGenerator;

/// Manages a user's short links and resolves codes for anyone.
#[derive(Debug, Clone)]
pub struct LinkService {
    /// Link storage.
    store: Arc<dyn LinkStore>,
    /// Candidate code source.
    generator: Arc<dyn ShortCodeGenerator>,
    /// Upper bound on candidate codes tried per creation.
    max_attempts: u32,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        store: Arc<dyn LinkStore>,
        generator: Arc<dyn ShortCodeGenerator>,
        max_attempts: u32,
    ) -> Self {
        Self {
            store,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Shortens `original` for the caller.
    ///
    /// The URL is stored verbatim. A candidate code is discarded when it is
    /// already in use or when the store rejects it as a duplicate.
    pub async fn create_link(
        &self,
        principal: &AuthPrincipal,
        original: &str,
    ) -> Result<ShortLink, AppError> {
        if original.trim().is_empty() {
            return Err(AppError::validation("URL is required"));
        }

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            if self.store.find_by_code(&code).await?.is_some() {
                warn!(attempt, "Short code already in use, retrying");
                continue;
            }

            let data = CreateLink {
                original: original.to_string(),
                code,
                owner_id: principal.user_id,
            };

            match self.store.create(&data).await {
                Ok(link) => {
                    info!(
                        link_id = %link.id,
                        owner_id = %link.owner_id,
                        code = %link.code,
                        "Short link created"
                    );
                    return Ok(link);
                }
                Err(e) if e.is_conflict() => {
                    warn!(attempt, "Short code taken concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            owner_id = %principal.user_id,
            max_attempts = self.max_attempts,
            "Short code allocation exhausted"
        );
        Err(AppError::capacity_exhausted("Unable to allocate a short code"))
    }

    /// Lists the caller's links, oldest first.
    pub async fn list_links(&self, principal: &AuthPrincipal) -> Result<Vec<ShortLink>, AppError> {
        let links = self.store.find_by_owner(principal.user_id).await?;
        if links.is_empty() {
            return Err(AppError::not_found("User does not have any URLs"));
        }
        Ok(links)
    }

    /// Deletes one of the caller's links, returning the removed record.
    pub async fn delete_link(
        &self,
        principal: &AuthPrincipal,
        id: LinkId,
    ) -> Result<ShortLink, AppError> {
        let link = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL does not exist"))?;

        if !link.is_owned_by(principal.user_id) {
            return Err(AppError::forbidden(
                "User is trying to delete other users records",
            ));
        }

        // Lost a race with another delete of the same link.
        if !self.store.delete(id).await? {
            return Err(AppError::not_found("URL does not exist"));
        }

        info!(link_id = %id, owner_id = %principal.user_id, "Short link deleted");

        Ok(link)
    }

    /// Looks up the link a short code points to. No authentication needed.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        self.store
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL does not exist"))
    }
}
