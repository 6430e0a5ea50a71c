//! In-memory record store using a Tokio mutex for single-node deployments
//! and tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use nestor_core::error::AppError;
use nestor_core::result::AppResult;
use nestor_core::types::{CollectionId, KeyId, TokenId, UserId};
use nestor_entity::collection::{Collection, CreateCollection};
use nestor_entity::key::{CreateKey, Key};
use nestor_entity::token::{CreateToken, Token};
use nestor_entity::user::{CreateUser, User};

use crate::store::{CollectionStore, KeyStore, TokenStore, UserStore};

/// All tables, in insertion order.
#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    tokens: Vec<Token>,
    collections: Vec<Collection>,
    keys: Vec<Key>,
}

/// In-memory store implementing every store trait.
///
/// Every uniqueness and ownership check runs under the same guard as the
/// insert it protects, so concurrent writers observe the same constraints as
/// the PostgreSQL schema. Contents are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn count_by_username(&self, username: &str) -> AppResult<u64> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().filter(|u| u.username == username).count() as u64)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.lock().await;

        if tables.users.iter().any(|u| u.username == data.username) {
            return Err(AppError::duplicate_username(&data.username));
        }

        let user = User {
            id: UserId::new(),
            username: data.username.clone(),
            password_hash: data.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        debug!(user_id = %user.id, total = tables.users.len(), "User stored");

        Ok(user)
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn exists(&self, token: &str) -> AppResult<bool> {
        let tables = self.tables.lock().await;
        Ok(tables.tokens.iter().any(|t| t.token == token))
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<Token>> {
        let tables = self.tables.lock().await;
        Ok(tables.tokens.iter().find(|t| t.token == token).cloned())
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Token>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .tokens
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateToken) -> AppResult<Token> {
        let mut tables = self.tables.lock().await;

        if tables.tokens.iter().any(|t| t.token == data.token) {
            return Err(AppError::conflict("Token string already issued"));
        }
        if !tables.users.iter().any(|u| u.id == data.user_id) {
            return Err(AppError::user_not_found());
        }

        let token = Token {
            id: TokenId::new(),
            user_id: data.user_id,
            token: data.token.clone(),
            issued_at: Utc::now(),
        };
        tables.tokens.push(token.clone());

        Ok(token)
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn find_by_id(&self, id: CollectionId) -> AppResult<Option<Collection>> {
        let tables = self.tables.lock().await;
        Ok(tables.collections.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_user_and_name(
        &self,
        user_id: UserId,
        name: &str,
    ) -> AppResult<Option<Collection>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .collections
            .iter()
            .find(|c| c.user_id == user_id && c.name == name)
            .cloned())
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Collection>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .collections
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateCollection) -> AppResult<Collection> {
        let mut tables = self.tables.lock().await;

        if tables
            .collections
            .iter()
            .any(|c| c.user_id == data.user_id && c.name == data.name)
        {
            return Err(AppError::duplicate_collection_name(&data.name));
        }
        if !tables.users.iter().any(|u| u.id == data.user_id) {
            return Err(AppError::user_not_found());
        }

        let collection = Collection {
            id: CollectionId::new(),
            user_id: data.user_id,
            name: data.name.clone(),
            created_at: Utc::now(),
        };
        tables.collections.push(collection.clone());

        Ok(collection)
    }
}

#[async_trait]
impl KeyStore for MemoryStore {
    async fn find_by_user_and_name(&self, user_id: UserId, name: &str) -> AppResult<Option<Key>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .keys
            .iter()
            .find(|k| k.user_id == user_id && k.name == name)
            .cloned())
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Key>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .keys
            .iter()
            .filter(|k| k.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_collection(&self, collection_id: CollectionId) -> AppResult<Vec<Key>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .keys
            .iter()
            .filter(|k| k.collection_id == collection_id)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateKey) -> AppResult<Key> {
        let mut tables = self.tables.lock().await;

        let collection = tables
            .collections
            .iter()
            .find(|c| c.id == data.collection_id)
            .ok_or_else(AppError::collection_not_found)?;
        if !collection.is_owned_by(data.user_id) {
            return Err(AppError::forbidden());
        }
        if tables
            .keys
            .iter()
            .any(|k| k.user_id == data.user_id && k.name == data.name)
        {
            return Err(AppError::duplicate_key_name(&data.name));
        }

        let key = Key {
            id: KeyId::new(),
            user_id: data.user_id,
            collection_id: data.collection_id,
            name: data.name.clone(),
            value: data.value.clone(),
            created_at: Utc::now(),
        };
        tables.keys.push(key.clone());

        Ok(key)
    }
}
