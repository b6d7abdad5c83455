//! PostgreSQL short link repository.

use async_trait::async_trait;
use sqlx::PgPool;

use linkhub_core::error::{AppError, ErrorKind};
use linkhub_core::result::AppResult;
use linkhub_core::types::{LinkId, UserId};
use linkhub_entity::link::{CreateLink, ShortLink};

use crate::store::LinkStore;

/// Unique constraint guarding `short_links.code`.
const CODE_CONSTRAINT: &str = "short_links_code_key";

/// Foreign key from `short_links.owner_id` to `users.id`.
const OWNER_CONSTRAINT: &str = "short_links_owner_id_fkey";

/// Repository for short link rows.
#[derive(Debug, Clone)]
pub struct LinkRepository {
    pool: PgPool,
}

impl LinkRepository {
    /// Create a new link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for LinkRepository {
    async fn find_by_id(&self, id: LinkId) -> AppResult<Option<ShortLink>> {
        sqlx::query_as::<_, ShortLink>("SELECT * FROM short_links WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find link by id", e))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<ShortLink>> {
        sqlx::query_as::<_, ShortLink>("SELECT * FROM short_links WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find link by code", e)
            })
    }

    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<ShortLink>> {
        sqlx::query_as::<_, ShortLink>(
            "SELECT * FROM short_links WHERE owner_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list links", e))
    }

    async fn create(&self, data: &CreateLink) -> AppResult<ShortLink> {
        sqlx::query_as::<_, ShortLink>(
            "INSERT INTO short_links (original, code, owner_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.original)
        .bind(&data.code)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(CODE_CONSTRAINT) => {
                AppError::conflict(format!("Short code '{}' already exists", data.code))
            }
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(OWNER_CONSTRAINT) => {
                AppError::not_found("User does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create link", e),
        })
    }

    async fn delete(&self, id: LinkId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM short_links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete link", e))?;

        Ok(result.rows_affected() > 0)
    }
}
