//! Collision-free bearer token issuance.

use std::sync::Arc;

use tracing::{info, warn};

use nestor_core::error::{AppError, ErrorKind};
use nestor_core::types::UserId;
use nestor_database::store::TokenStore;
use nestor_entity::token::{CreateToken, Token};

use super::generator::TokenSource;

/// Issues bearer tokens that are unique across all users.
///
/// A candidate is checked against the issued set and then inserted; the
/// store's uniqueness constraint is the final word, so a candidate that
/// loses a race on insert is discarded like one that failed the pre-check.
/// Retries are unbounded. With 49^20 candidates they terminate after the
/// first attempt in practice.
#[derive(Clone)]
pub struct TokenIssuer {
    tokens: Arc<dyn TokenStore>,
    source: Arc<dyn TokenSource>,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Creates a new token issuer.
    pub fn new(tokens: Arc<dyn TokenStore>, source: Arc<dyn TokenSource>) -> Self {
        Self { tokens, source }
    }

    /// Issues and persists a new token for `user_id`.
    pub async fn issue(&self, user_id: UserId) -> Result<Token, AppError> {
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let candidate = self.source.generate();

            if self.tokens.exists(&candidate).await? {
                warn!(user_id = %user_id, attempts, "Token candidate already issued, regenerating");
                continue;
            }

            let data = CreateToken {
                user_id,
                token: candidate,
            };

            match self.tokens.create(&data).await {
                Ok(token) => {
                    info!(user_id = %user_id, token_id = %token.id, attempts, "Token issued");
                    return Ok(token);
                }
                Err(e) if e.kind == ErrorKind::Conflict => {
                    warn!(user_id = %user_id, attempts, "Token candidate lost insert race, regenerating");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
