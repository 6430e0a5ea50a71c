//! Application builder: wires stores, auth components and services into
//! an Axum app.

use std::sync::Arc;

use axum::Router;
use tokio::sync::watch;
use tracing::info;

use nestor_auth::{
    AuthorizationGate, IdentityRegistry, PasswordHasher, PasswordValidator, RandomTokenGenerator,
    TokenIssuer,
};
use nestor_core::config::AppConfig;
use nestor_core::error::AppError;
use nestor_database::store::Stores;
use nestor_service::{CollectionService, KeyService, SessionService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared state on top of `stores`.
///
/// Runs the password hasher self-check; a hasher that cannot round-trip a
/// sample password fails startup.
pub fn build_state(
    config: AppConfig,
    stores: Stores,
    shutdown: Arc<watch::Sender<bool>>,
) -> Result<AppState, AppError> {
    let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
    hasher.self_check()?;
    let validator = Arc::new(PasswordValidator::new(&config.auth));

    let registry = Arc::new(IdentityRegistry::new(
        Arc::clone(&stores.users),
        hasher,
        validator,
    ));
    let issuer = Arc::new(TokenIssuer::new(
        Arc::clone(&stores.tokens),
        Arc::new(RandomTokenGenerator::new()),
    ));
    let gate = Arc::new(AuthorizationGate::new(
        Arc::clone(&stores.tokens),
        Arc::clone(&stores.users),
    ));

    let session_service = Arc::new(SessionService::new(
        registry,
        issuer,
        Arc::clone(&stores.tokens),
    ));
    let collection_service = Arc::new(CollectionService::new(Arc::clone(&stores.collections)));
    let key_service = Arc::new(KeyService::new(
        Arc::clone(&stores.collections),
        Arc::clone(&stores.keys),
    ));

    info!(provider = ?config.database.provider, "Application state ready");

    Ok(AppState {
        config: Arc::new(config),
        gate,
        session_service,
        collection_service,
        key_service,
        shutdown,
        database: None,
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}
