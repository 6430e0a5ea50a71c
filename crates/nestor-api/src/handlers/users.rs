//! User handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::CredentialsRequest;
use crate::dto::response::{Acknowledged, ApiResponse};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /users/
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<Json<ApiResponse<Acknowledged>>, ApiError> {
    state
        .session_service
        .register(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(Acknowledged {})))
}
