//! Key repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use nestor_core::error::{AppError, ErrorKind};
use nestor_core::result::AppResult;
use nestor_core::types::{CollectionId, UserId};
use nestor_entity::key::{CreateKey, Key};

use crate::store::KeyStore;

/// Repository for keys.
#[derive(Debug, Clone)]
pub struct KeyRepository {
    pool: PgPool,
}

impl KeyRepository {
    /// Create a new key repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyStore for KeyRepository {
    async fn find_by_user_and_name(&self, user_id: UserId, name: &str) -> AppResult<Option<Key>> {
        sqlx::query_as::<_, Key>("SELECT * FROM keys WHERE user_id = $1 AND name = $2")
            .bind(user_id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find key by name", e))
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Key>> {
        sqlx::query_as::<_, Key>(
            "SELECT * FROM keys WHERE user_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list keys", e))
    }

    async fn find_by_collection(&self, collection_id: CollectionId) -> AppResult<Vec<Key>> {
        sqlx::query_as::<_, Key>(
            "SELECT * FROM keys WHERE collection_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(collection_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list keys by collection", e)
        })
    }

    async fn create(&self, data: &CreateKey) -> AppResult<Key> {
        sqlx::query_as::<_, Key>(
            "INSERT INTO keys (user_id, collection_id, name, value) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.collection_id)
        .bind(&data.name)
        .bind(&data.value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("keys_user_id_name_key") =>
            {
                AppError::duplicate_key_name(&data.name)
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("keys_collection_owner_fkey") =>
            {
                AppError::forbidden()
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create key", e),
        })
    }
}
