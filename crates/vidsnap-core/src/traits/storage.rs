//! Object storage port for uploaded videos and derived archives.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for object storage backends (S3 or in-memory).
#[async_trait]
pub trait ObjectStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "s3", "memory").
    fn provider_type(&self) -> &str;

    /// Upload an object under the given key.
    async fn upload(&self, key: &str, data: Bytes, content_type: Option<&str>) -> AppResult<()>;

    /// Produce a time-limited signed GET URL for the given key.
    async fn signed_url(&self, key: &str) -> AppResult<String>;

    /// Delete the object at the given key.
    async fn delete(&self, key: &str) -> AppResult<()>;
}
