//! Authorization gate: bearer token to identity.

use std::sync::Arc;

use tracing::{debug, error};

use nestor_core::error::AppError;
use nestor_database::store::{TokenStore, UserStore};
use nestor_entity::user::User;

/// Resolves bearer tokens to the users they were issued to.
///
/// Every operation on tokens, collections or keys goes through
/// [`AuthorizationGate::resolve`] first.
#[derive(Clone)]
pub struct AuthorizationGate {
    tokens: Arc<dyn TokenStore>,
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for AuthorizationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationGate").finish_non_exhaustive()
    }
}

impl AuthorizationGate {
    /// Creates a new gate.
    pub fn new(tokens: Arc<dyn TokenStore>, users: Arc<dyn UserStore>) -> Self {
        Self { tokens, users }
    }

    /// Resolves a bearer token.
    ///
    /// `None` and the empty string both count as no token.
    pub async fn resolve(&self, token: Option<&str>) -> Result<User, AppError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(AppError::missing_token)?;

        let record = self
            .tokens
            .find_by_token(token)
            .await?
            .ok_or_else(AppError::token_not_found)?;

        let user = self.users.find_by_id(record.user_id).await?.ok_or_else(|| {
            error!(token_id = %record.id, user_id = %record.user_id, "Token owner missing");
            AppError::internal("Token owner missing")
        })?;

        debug!(user_id = %user.id, token_id = %record.id, "Token resolved");
        Ok(user)
    }
}
