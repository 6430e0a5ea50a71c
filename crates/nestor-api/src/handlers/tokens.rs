//! Token handlers: login and token listing.

use axum::Json;
use axum::extract::State;

use crate::dto::request::CredentialsRequest;
use crate::dto::response::{ApiResponse, LoginResponse, TokenListResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /tokens/
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let token = state
        .session_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse { token: token.token })))
}

/// GET /tokens/
pub async fn list_tokens(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<TokenListResponse>>, ApiError> {
    let tokens = state.session_service.list_tokens(auth.context()).await?;

    Ok(Json(ApiResponse::ok(TokenListResponse {
        tokens: tokens.into_iter().map(TokenResponse::from).collect(),
    })))
}
