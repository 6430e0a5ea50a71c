//! Escalates fatal errors to a server shutdown.
//!
//! A response carrying a fatal [`ErrorKind`] (hashing failure) means the
//! credential store can no longer be trusted. The request still gets its
//! 500; the shutdown signal then stops the listener.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::error;

use nestor_core::error::ErrorKind;

use crate::state::AppState;

/// Trips the shutdown signal when a handler returned a fatal error.
pub async fn escalate_fatal(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if let Some(kind) = response.extensions().get::<ErrorKind>().filter(|k| k.is_fatal()) {
        error!(kind = %kind, "Fatal error, shutting down");
        state.trigger_shutdown();
    }

    response
}
