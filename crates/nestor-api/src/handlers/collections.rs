//! Collection handlers.

use axum::Json;
use axum::extract::State;

use nestor_service::collection::CreateCollectionRequest;

use crate::dto::request::CreateCollectionBody;
use crate::dto::response::{
    ApiResponse, CollectionCreatedResponse, CollectionListResponse, CollectionResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /collections/
pub async fn create_collection(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateCollectionBody>,
) -> Result<Json<ApiResponse<CollectionCreatedResponse>>, ApiError> {
    let collection = state
        .collection_service
        .create_collection(auth.context(), CreateCollectionRequest { name: req.name })
        .await?;

    Ok(Json(ApiResponse::ok(CollectionCreatedResponse {
        collection: collection.into(),
    })))
}

/// GET /collections/
pub async fn list_collections(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CollectionListResponse>>, ApiError> {
    let collections = state
        .collection_service
        .list_collections(auth.context())
        .await?;

    Ok(Json(ApiResponse::ok(CollectionListResponse {
        collections: collections
            .into_iter()
            .map(CollectionResponse::from)
            .collect(),
    })))
}
