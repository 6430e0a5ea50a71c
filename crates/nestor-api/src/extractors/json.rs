//! JSON body extractor that validates before the handler runs.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use nestor_core::error::AppError;

use crate::error::ApiError;

/// Deserializes a JSON body and runs its `validator` rules.
///
/// An unreadable body and a failed rule both reject with
/// `IncompleteInput`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            debug!(error = %rejection, "Rejected request body");
            AppError::incomplete_input()
        })?;

        value
            .validate()
            .map_err(|_| AppError::incomplete_input())?;

        Ok(Self(value))
    }
}
