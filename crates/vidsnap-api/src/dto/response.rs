//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vidsnap_entity::file::{File, FileStatus};
use vidsnap_entity::notification::{Notification, NotificationKind};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Fixed liveness message.
    pub message: String,
}

/// A file as returned by the API. `screenshotsTime` is a plain number
/// on the wire, converted from the NUMERIC storage representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub id: Uuid,
    pub user_id: String,
    pub video_url: Option<String>,
    pub images_compressed_url: Option<String>,
    pub screenshots_time: f64,
    pub status: FileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<File> for FileResponse {
    fn from(file: File) -> Self {
        Self {
            screenshots_time: file.screenshots_time_secs(),
            id: file.id,
            user_id: file.user_id,
            video_url: file.video_url,
            images_compressed_url: file.images_compressed_url,
            status: file.status,
            created_at: file.created_at,
            updated_at: file.updated_at,
        }
    }
}

/// A notification as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: Uuid,
    pub user_id: String,
    pub file_id: Uuid,
    pub notification_type: NotificationKind,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            user_id: n.user_id,
            file_id: n.file_id,
            notification_type: n.notification_type,
            text: n.text,
            created_at: n.created_at,
        }
    }
}
