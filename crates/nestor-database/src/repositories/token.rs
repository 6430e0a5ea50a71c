//! Token repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use nestor_core::error::{AppError, ErrorKind};
use nestor_core::result::AppResult;
use nestor_core::types::UserId;
use nestor_entity::token::{CreateToken, Token};

use crate::store::TokenStore;

/// Repository for issued bearer tokens.
#[derive(Debug, Clone)]
pub struct TokenRepository {
    pool: PgPool,
}

impl TokenRepository {
    /// Create a new token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenStore for TokenRepository {
    async fn exists(&self, token: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM tokens WHERE token = $1)")
            .bind(token)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check token", e))
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<Token>> {
        sqlx::query_as::<_, Token>("SELECT * FROM tokens WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find token", e))
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Token>> {
        sqlx::query_as::<_, Token>(
            "SELECT * FROM tokens WHERE user_id = $1 ORDER BY issued_at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tokens", e))
    }

    async fn create(&self, data: &CreateToken) -> AppResult<Token> {
        sqlx::query_as::<_, Token>(
            "INSERT INTO tokens (user_id, token) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("tokens_token_key") =>
            {
                AppError::conflict("Token string already issued")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create token", e),
        })
    }
}
