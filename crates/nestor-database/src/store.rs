//! Record store traits.
//!
//! Each trait covers one table. Implementations must enforce the uniqueness
//! rules documented on their `create` methods atomically with the insert;
//! callers may pre-check for friendlier errors but never rely on it.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use nestor_core::result::AppResult;
use nestor_core::types::{CollectionId, UserId};
use nestor_entity::collection::{Collection, CreateCollection};
use nestor_entity::key::{CreateKey, Key};
use nestor_entity::token::{CreateToken, Token};
use nestor_entity::user::{CreateUser, User};

use crate::memory::MemoryStore;
use crate::repositories::{CollectionRepository, KeyRepository, TokenRepository, UserRepository};

/// User records.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Count users whose username matches exactly (case-sensitive).
    async fn count_by_username(&self, username: &str) -> AppResult<u64>;

    /// Find the first user with this exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Insert a user. Fails with `DuplicateUsername` if the username exists.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// Issued bearer tokens.
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    /// Whether any issued token has this exact string.
    async fn exists(&self, token: &str) -> AppResult<bool>;

    /// Find the token record for a bearer string.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<Token>>;

    /// All tokens issued to a user, oldest first.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Token>>;

    /// Insert a token. Fails with `Conflict` if the string is already issued.
    async fn create(&self, data: &CreateToken) -> AppResult<Token>;
}

/// Collections.
#[async_trait]
pub trait CollectionStore: Send + Sync + 'static {
    /// Find a collection by primary key, regardless of owner.
    async fn find_by_id(&self, id: CollectionId) -> AppResult<Option<Collection>>;

    /// Find the owner's collection with this exact name.
    async fn find_by_user_and_name(
        &self,
        user_id: UserId,
        name: &str,
    ) -> AppResult<Option<Collection>>;

    /// All collections owned by a user, oldest first.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Collection>>;

    /// Insert a collection. Fails with `DuplicateCollectionName` if the owner
    /// already has one with that name.
    async fn create(&self, data: &CreateCollection) -> AppResult<Collection>;
}

/// Keys.
#[async_trait]
pub trait KeyStore: Send + Sync + 'static {
    /// Find the owner's key with this exact name, in any collection.
    async fn find_by_user_and_name(&self, user_id: UserId, name: &str) -> AppResult<Option<Key>>;

    /// All keys owned by a user, oldest first.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Key>>;

    /// All keys filed under a collection, oldest first.
    async fn find_by_collection(&self, collection_id: CollectionId) -> AppResult<Vec<Key>>;

    /// Insert a key. Fails with `DuplicateKeyName` if the owner already has a
    /// key with that name, and with `Forbidden` if the collection is not
    /// owned by the key's owner.
    async fn create(&self, data: &CreateKey) -> AppResult<Key>;
}

/// The full set of stores, injected into the auth and service layers.
#[derive(Clone)]
pub struct Stores {
    /// User records.
    pub users: Arc<dyn UserStore>,
    /// Issued tokens.
    pub tokens: Arc<dyn TokenStore>,
    /// Collections.
    pub collections: Arc<dyn CollectionStore>,
    /// Keys.
    pub keys: Arc<dyn KeyStore>,
}

impl Stores {
    /// Back every store with one shared in-memory store.
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: Arc::clone(&store) as Arc<dyn UserStore>,
            tokens: Arc::clone(&store) as Arc<dyn TokenStore>,
            collections: Arc::clone(&store) as Arc<dyn CollectionStore>,
            keys: store,
        }
    }

    /// Back every store with PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            tokens: Arc::new(TokenRepository::new(pool.clone())),
            collections: Arc::new(CollectionRepository::new(pool.clone())),
            keys: Arc::new(KeyRepository::new(pool)),
        }
    }
}

impl fmt::Debug for Stores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
