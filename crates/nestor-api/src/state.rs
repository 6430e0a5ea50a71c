//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tokio::sync::watch;

use nestor_auth::gate::AuthorizationGate;
use nestor_core::config::AppConfig;
use nestor_database::DatabasePool;
use nestor_service::collection::CollectionService;
use nestor_service::key::KeyService;
use nestor_service::session::SessionService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bearer token resolver
    pub gate: Arc<AuthorizationGate>,
    /// Registration, login and token listing
    pub session_service: Arc<SessionService>,
    /// Collection management
    pub collection_service: Arc<CollectionService>,
    /// Key management
    pub key_service: Arc<KeyService>,
    /// Set to `true` to stop the server
    pub shutdown: Arc<watch::Sender<bool>>,
    /// PostgreSQL pool, absent for the in-memory store
    pub database: Option<DatabasePool>,
}

impl AppState {
    /// Attaches the PostgreSQL pool so `/health` can check it.
    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }

    /// Asks the server to shut down.
    pub fn trigger_shutdown(&self) {
        self.shutdown.send_replace(true);
    }
}
