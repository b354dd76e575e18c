//! File entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::FileStatus;

/// An uploaded video file tracked through its conversion lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub id: Uuid,
    /// The owning user (opaque identity from the external auth provider).
    pub user_id: String,
    /// Storage key of the uploaded source video. NULL until upload completes.
    pub video_url: Option<String>,
    /// Storage key of the derived compressed-image archive. NULL until
    /// the worker reports completion.
    pub images_compressed_url: Option<String>,
    /// Interval in seconds between extracted screenshots. Stored as NUMERIC.
    pub screenshots_time: Decimal,
    /// Current lifecycle status.
    pub status: FileStatus,
    /// When the file record was created.
    pub created_at: DateTime<Utc>,
    /// When the file record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// The screenshot interval as a plain `f64` for API responses.
    pub fn screenshots_time_secs(&self) -> f64 {
        self.screenshots_time.to_f64().unwrap_or_default()
    }

    /// Storage path of the derived archive: `{user_id}/images/{key}`.
    ///
    /// A file whose archive key is still NULL yields the degenerate path
    /// `{user_id}/images/` unchanged, matching the upstream behavior.
    pub fn images_storage_path(&self) -> String {
        format!(
            "{}/images/{}",
            self.user_id,
            self.images_compressed_url.as_deref().unwrap_or_default()
        )
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// The owning user.
    pub user_id: String,
    /// Storage key of the source video.
    pub video_url: String,
    /// Screenshot interval in seconds.
    pub screenshots_time: Decimal,
}
