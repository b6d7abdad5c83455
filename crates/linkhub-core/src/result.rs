//! Convenience result type alias for LinkHub.

use crate::error::AppError;

/// A specialized `Result` type for LinkHub operations.
pub type AppResult<T> = Result<T, AppError>;
