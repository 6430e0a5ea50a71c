//! Collection repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use nestor_core::error::{AppError, ErrorKind};
use nestor_core::result::AppResult;
use nestor_core::types::{CollectionId, UserId};
use nestor_entity::collection::{Collection, CreateCollection};

use crate::store::CollectionStore;

/// Repository for collections.
#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: PgPool,
}

impl CollectionRepository {
    /// Create a new collection repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionStore for CollectionRepository {
    async fn find_by_id(&self, id: CollectionId) -> AppResult<Option<Collection>> {
        sqlx::query_as::<_, Collection>("SELECT * FROM collections WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find collection", e))
    }

    async fn find_by_user_and_name(
        &self,
        user_id: UserId,
        name: &str,
    ) -> AppResult<Option<Collection>> {
        sqlx::query_as::<_, Collection>(
            "SELECT * FROM collections WHERE user_id = $1 AND name = $2",
        )
        .bind(user_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find collection by name", e)
        })
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Collection>> {
        sqlx::query_as::<_, Collection>(
            "SELECT * FROM collections WHERE user_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list collections", e))
    }

    async fn create(&self, data: &CreateCollection) -> AppResult<Collection> {
        sqlx::query_as::<_, Collection>(
            "INSERT INTO collections (user_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("collections_user_id_name_key") =>
            {
                AppError::duplicate_collection_name(&data.name)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create collection", e),
        })
    }
}
