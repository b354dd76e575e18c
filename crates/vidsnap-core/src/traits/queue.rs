//! Conversion job queue port.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::result::AppResult;

/// Message published for every newly uploaded video. The external
/// conversion worker consumes these and reports back through the file
/// update endpoint. Serialized as camelCase JSON on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionJob {
    /// Original file name of the uploaded video.
    pub file_name: String,
    /// Storage key the video was uploaded under.
    pub file_storage_key: String,
    /// The owning user.
    pub user_id: String,
    /// The persisted file record id.
    pub file_id: Uuid,
    /// Screenshot interval in seconds.
    pub screenshots_time: Decimal,
}

/// Trait for the conversion job queue (SQS or in-memory).
#[async_trait]
pub trait ConversionQueue: Send + Sync + std::fmt::Debug + 'static {
    /// Publish a conversion job. Failures propagate to the caller.
    async fn publish(&self, job: &ConversionJob) -> AppResult<()>;
}
