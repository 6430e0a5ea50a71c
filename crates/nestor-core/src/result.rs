//! Convenience result type alias for Nestor.

use crate::error::AppError;

/// A specialized `Result` type for Nestor operations.
pub type AppResult<T> = Result<T, AppError>;
