//! Issued bearer token model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use nestor_core::types::{TokenId, UserId};

/// An issued bearer token. Tokens never expire and are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Token {
    /// Unique token record identifier.
    pub id: TokenId,
    /// The user this token authenticates as.
    #[serde(skip_serializing)]
    pub user_id: UserId,
    /// The bearer string, globally unique.
    pub token: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
}

/// Data required to persist a newly issued token.
#[derive(Debug, Clone)]
pub struct CreateToken {
    /// Owning user.
    pub user_id: UserId,
    /// Candidate bearer string.
    pub token: String,
}
