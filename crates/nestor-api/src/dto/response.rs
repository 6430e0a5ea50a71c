//! Response DTOs.
//!
//! Owner ids never leave the server; these types carry only what the
//! caller may see.

use chrono::{DateTime, Utc};
use serde::Serialize;

use nestor_core::types::{CollectionId, KeyId, TokenId};
use nestor_entity::collection::Collection;
use nestor_entity::key::Key;
use nestor_entity::token::Token;

/// Standard success response wrapper. The payload's fields sit next to
/// `success` in the JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Empty payload.
#[derive(Debug, Clone, Serialize)]
pub struct Acknowledged {}

/// Login result.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// An issued token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub id: TokenId,
    pub token: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Token> for TokenResponse {
    fn from(token: Token) -> Self {
        Self {
            id: token.id,
            token: token.token,
            timestamp: token.issued_at,
        }
    }
}

/// Token listing.
#[derive(Debug, Clone, Serialize)]
pub struct TokenListResponse {
    pub tokens: Vec<TokenResponse>,
}

/// A collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionResponse {
    pub id: CollectionId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id,
            name: collection.name,
            created_at: collection.created_at,
        }
    }
}

/// Collection creation result.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionCreatedResponse {
    pub collection: CollectionResponse,
}

/// Collection listing.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionListResponse {
    pub collections: Vec<CollectionResponse>,
}

/// A key and its value.
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    pub id: KeyId,
    pub collection_id: CollectionId,
    pub name: String,
    pub key: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Key> for KeyResponse {
    fn from(key: Key) -> Self {
        Self {
            id: key.id,
            collection_id: key.collection_id,
            name: key.name,
            key: key.value,
            timestamp: key.created_at,
        }
    }
}

/// Key creation result.
#[derive(Debug, Clone, Serialize)]
pub struct KeyCreatedResponse {
    pub key: KeyResponse,
}

/// Key listing.
#[derive(Debug, Clone, Serialize)]
pub struct KeyListResponse {
    pub keys: Vec<KeyResponse>,
}

/// Health check result.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `memory`, `connected` or `unavailable`
    pub database: String,
}
