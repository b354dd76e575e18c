//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// A notification recording a file-status change for a user.
///
/// Created once, immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: String,
    /// The file this notification refers to.
    pub file_id: Uuid,
    /// Outcome class.
    pub notification_type: NotificationKind,
    /// Human-readable message derived from the file status.
    pub text: String,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new notification record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// The recipient user.
    pub user_id: String,
    /// The file this notification refers to.
    pub file_id: Uuid,
    /// Outcome class.
    pub notification_type: NotificationKind,
    /// Message text.
    pub text: String,
}
