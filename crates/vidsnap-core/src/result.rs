//! Convenience result type alias for VidSnap.

use crate::error::AppError;

/// A specialized `Result` type for VidSnap operations.
pub type AppResult<T> = Result<T, AppError>;
