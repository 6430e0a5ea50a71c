//! Nestor Server: credential and scoped key authorization service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use nestor_core::config::{AppConfig, StoreProvider};
use nestor_core::error::AppError;
use nestor_database::{DatabasePool, Stores};

#[tokio::main]
async fn main() {
    let env = std::env::var("NESTOR_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Nestor v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Record stores ────────────────────────────────────
    let (stores, db_pool) = match config.database.provider {
        StoreProvider::Memory => {
            tracing::warn!("Using the in-memory store; records are lost on exit");
            (Stores::memory(), None)
        }
        StoreProvider::Postgres => {
            let db_pool = DatabasePool::connect(&config.database).await?;
            if config.database.run_migrations {
                nestor_database::migration::run_migrations(db_pool.pool()).await?;
            }
            (Stores::postgres(db_pool.pool().clone()), Some(db_pool))
        }
    };

    // ── Step 2: Shutdown signal ──────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let shutdown_tx = Arc::new(shutdown_tx);

    // ── Step 3: State + router ───────────────────────────────────
    let bind_address = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let mut state = nestor_api::build_state(config, stores, Arc::clone(&shutdown_tx))?;
    if let Some(pool) = &db_pool {
        state = state.with_database(pool.clone());
    }
    let app = nestor_api::build_app(state);

    // ── Step 4: Serve ────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_address}: {e}")))?;
    tracing::info!(address = %bind_address, "Listening");

    tokio::spawn(forward_os_signals(Arc::clone(&shutdown_tx)));

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown_rx.clone()))
        .into_future();

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            wait_for_shutdown(shutdown_rx).await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, dropping open connections");
        }
    }

    if let Some(db_pool) = db_pool {
        db_pool.close().await;
    }

    tracing::info!("Nestor stopped");
    Ok(())
}

/// Resolves once the shutdown flag is set.
async fn wait_for_shutdown(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}

/// Sets the shutdown flag on Ctrl+C or SIGTERM.
async fn forward_os_signals(shutdown: Arc<watch::Sender<bool>>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
    shutdown.send_replace(true);
}
