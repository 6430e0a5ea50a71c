//! Route definitions for the Nestor HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(user_routes())
        .merge(token_routes())
        .merge(collection_routes())
        .merge(key_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::fatal::escalate_fatal,
        ))
        .layer(
            // Path only; the query string may carry a bearer token.
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/", post(handlers::users::register))
}

/// Login and token listing
fn token_routes() -> Router<AppState> {
    Router::new().route(
        "/tokens/",
        post(handlers::tokens::login).get(handlers::tokens::list_tokens),
    )
}

fn collection_routes() -> Router<AppState> {
    Router::new().route(
        "/collections/",
        post(handlers::collections::create_collection)
            .get(handlers::collections::list_collections),
    )
}

fn key_routes() -> Router<AppState> {
    Router::new().route(
        "/keys/",
        post(handlers::keys::create_key).get(handlers::keys::list_keys),
    )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
