//! File processing status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an uploaded video file.
///
/// The workflow only ever moves a file forward
/// (`initialized → processing → processed`, or to `error` from any
/// non-terminal state), but transitions are driven entirely by the
/// external conversion worker and are not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "file_status", rename_all = "lowercase")]
pub enum FileStatus {
    /// Upload accepted, conversion job enqueued.
    Initialized,
    /// The worker has picked the job up.
    Processing,
    /// Screenshot archive is available.
    Processed,
    /// Conversion failed.
    Error,
}

impl FileStatus {
    /// Whether this status represents a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Processed | Self::Error)
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized => write!(f, "initialized"),
            Self::Processing => write!(f, "processing"),
            Self::Processed => write!(f, "processed"),
            Self::Error => write!(f, "error"),
        }
    }
}
