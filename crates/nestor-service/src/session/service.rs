//! Session service: turns credentials into users and bearer tokens.

use std::sync::Arc;

use tracing::info;

use nestor_auth::identity::IdentityRegistry;
use nestor_auth::token::TokenIssuer;
use nestor_core::error::AppError;
use nestor_database::store::TokenStore;
use nestor_entity::token::Token;
use nestor_entity::user::User;

use crate::context::RequestContext;

/// Handles registration, login and token listing.
#[derive(Clone)]
pub struct SessionService {
    /// Identity registry.
    registry: Arc<IdentityRegistry>,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
    /// Token store, for listing.
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("registry", &self.registry)
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(
        registry: Arc<IdentityRegistry>,
        issuer: Arc<TokenIssuer>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            registry,
            issuer,
            tokens,
        }
    }

    /// Registers a new account.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        self.registry.register(username, password).await
    }

    /// Authenticates and issues a fresh bearer token.
    ///
    /// Earlier tokens stay valid; every login adds one.
    pub async fn login(&self, username: &str, password: &str) -> Result<Token, AppError> {
        let user = self.registry.authenticate(username, password).await?;
        let token = self.issuer.issue(user.id).await?;

        info!(user_id = %user.id, token_id = %token.id, "User logged in");

        Ok(token)
    }

    /// Lists the caller's tokens in issuance order.
    pub async fn list_tokens(&self, ctx: &RequestContext) -> Result<Vec<Token>, AppError> {
        self.tokens.find_by_user(ctx.user_id).await
    }
}
