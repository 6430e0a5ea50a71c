//! Key entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use nestor_core::types::{CollectionId, KeyId, UserId};

/// A named opaque value owned by one user and filed under one of that
/// user's collections.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Key {
    /// Unique key identifier.
    pub id: KeyId,
    /// The key owner.
    #[serde(skip_serializing)]
    pub user_id: UserId,
    /// The collection this key is filed under; owned by `user_id`.
    pub collection_id: CollectionId,
    /// Name, unique among all of the owner's keys.
    pub name: String,
    /// Opaque stored value.
    pub value: String,
    /// When the key was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new key.
#[derive(Debug, Clone)]
pub struct CreateKey {
    /// The key owner.
    pub user_id: UserId,
    /// Target collection, already verified to belong to `user_id`.
    pub collection_id: CollectionId,
    /// Key name.
    pub name: String,
    /// Opaque value.
    pub value: String,
}
