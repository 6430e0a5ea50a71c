//! Shared fixtures for service tests.

use std::sync::Arc;

use nestor_auth::{
    AuthorizationGate, IdentityRegistry, PasswordHasher, PasswordValidator, RandomTokenGenerator,
    TokenIssuer,
};
use nestor_core::config::AuthConfig;
use nestor_database::store::Stores;

use crate::{CollectionService, KeyService, RequestContext, SessionService};

pub(crate) struct Harness {
    pub sessions: SessionService,
    pub collections: CollectionService,
    pub keys: KeyService,
    pub gate: AuthorizationGate,
}

impl Harness {
    pub fn new() -> Self {
        let stores = Stores::memory();
        let config = AuthConfig {
            hash_memory_kib: 8,
            hash_iterations: 1,
            hash_parallelism: 1,
            ..AuthConfig::default()
        };
        let registry = IdentityRegistry::new(
            Arc::clone(&stores.users),
            Arc::new(PasswordHasher::new(&config).unwrap()),
            Arc::new(PasswordValidator::new(&config)),
        );
        let issuer = TokenIssuer::new(
            Arc::clone(&stores.tokens),
            Arc::new(RandomTokenGenerator::new()),
        );

        Self {
            sessions: SessionService::new(
                Arc::new(registry),
                Arc::new(issuer),
                Arc::clone(&stores.tokens),
            ),
            collections: CollectionService::new(Arc::clone(&stores.collections)),
            keys: KeyService::new(Arc::clone(&stores.collections), Arc::clone(&stores.keys)),
            gate: AuthorizationGate::new(Arc::clone(&stores.tokens), Arc::clone(&stores.users)),
        }
    }

    /// Resolves a token the way the API does.
    pub async fn ctx(&self, token: &str) -> RequestContext {
        let user = self.gate.resolve(Some(token)).await.unwrap();
        RequestContext::from(&user)
    }

    /// Registers `username` and returns a context for a fresh login.
    pub async fn login(&self, username: &str) -> RequestContext {
        self.sessions.register(username, "pw").await.unwrap();
        let token = self.sessions.login(username, "pw").await.unwrap();
        self.ctx(&token.token).await
    }
}
