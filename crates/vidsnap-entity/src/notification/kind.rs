//! Notification kind.

use serde::{Deserialize, Serialize};

/// Outcome class of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "notification_kind", rename_all = "lowercase")]
pub enum NotificationKind {
    /// The file progressed normally (initialized, processing, processed).
    Success,
    /// Conversion failed.
    Error,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}
