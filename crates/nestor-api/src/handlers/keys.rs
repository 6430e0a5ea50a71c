//! Key handlers.

use axum::Json;
use axum::extract::{Query, State};

use nestor_service::key::CreateKeyRequest;

use crate::dto::request::{CreateKeyBody, KeyListQuery};
use crate::dto::response::{ApiResponse, KeyCreatedResponse, KeyListResponse, KeyResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /keys/
pub async fn create_key(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateKeyBody>,
) -> Result<Json<ApiResponse<KeyCreatedResponse>>, ApiError> {
    let key = state
        .key_service
        .create_key(
            auth.context(),
            CreateKeyRequest {
                collection: req.collection,
                name: req.name,
                value: req.key,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(KeyCreatedResponse { key: key.into() })))
}

/// GET /keys/
pub async fn list_keys(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<KeyListQuery>,
) -> Result<Json<ApiResponse<KeyListResponse>>, ApiError> {
    let keys = state
        .key_service
        .list_keys(auth.context(), query.collection.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(KeyListResponse {
        keys: keys.into_iter().map(KeyResponse::from).collect(),
    })))
}
