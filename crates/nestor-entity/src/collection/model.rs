//! Collection entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use nestor_core::types::{CollectionId, UserId};

/// A named grouping of keys owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Collection {
    /// Unique collection identifier.
    pub id: CollectionId,
    /// The collection owner.
    #[serde(skip_serializing)]
    pub user_id: UserId,
    /// Name, unique among the owner's collections.
    pub name: String,
    /// When the collection was created.
    pub created_at: DateTime<Utc>,
}

impl Collection {
    /// Check whether `user_id` owns this collection.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Data required to create a new collection.
#[derive(Debug, Clone)]
pub struct CreateCollection {
    /// The collection owner.
    pub user_id: UserId,
    /// Collection name.
    pub name: String,
}
