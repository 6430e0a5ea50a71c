//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /health
///
/// Reports `degraded` while the PostgreSQL pool fails its connectivity
/// check. The in-memory store is always healthy.
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database = match &state.database {
        None => "memory",
        Some(pool) => match pool.health_check().await {
            Ok(true) => "connected",
            Ok(false) => "unavailable",
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                "unavailable"
            }
        },
    };

    let status = if database == "unavailable" { "degraded" } else { "ok" };

    Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    }))
}
