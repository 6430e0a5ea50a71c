//! Request DTOs with validation.
//!
//! Every field defaults to empty so a missing field and a blank one are
//! rejected the same way.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration and login body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CredentialsRequest {
    /// Username.
    #[validate(length(min = 1))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Collection creation body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateCollectionBody {
    /// Collection name.
    #[validate(length(min = 1))]
    pub name: String,
}

/// Key creation body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateKeyBody {
    /// Target collection id.
    #[validate(length(min = 1))]
    pub collection: String,
    /// Key name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Key value.
    #[validate(length(min = 1))]
    pub key: String,
}

/// Query for `GET /keys/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyListQuery {
    /// Only list keys in this collection.
    pub collection: Option<String>,
}
