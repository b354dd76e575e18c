//! S3 object storage implementation.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{debug, info};

use vidsnap_core::error::{AppError, ErrorKind};
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::ObjectStorage;

/// Lifetime of presigned download URLs.
const SIGNED_URL_TTL: Duration = Duration::from_secs(3600);

/// Object storage backed by an S3 bucket.
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    /// Create a new S3 storage provider for the given bucket.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn upload(&self, key: &str, data: Bytes, content_type: Option<&str>) -> AppResult<()> {
        let size = data.len();
        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data));
        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }
        request.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to upload object {key}"),
                e,
            )
        })?;

        info!(bucket = %self.bucket, key = %key, size_bytes = size, "S3 upload successful");
        Ok(())
    }

    async fn signed_url(&self, key: &str) -> AppResult<String> {
        let presigning_config = PresigningConfig::expires_in(SIGNED_URL_TTL).map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Invalid presigning configuration", e)
        })?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to presign object {key}"),
                    e,
                )
            })?;

        debug!(bucket = %self.bucket, key = %key, "Presigned download URL generated");
        Ok(presigned.uri().to_string())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete object {key}"),
                    e,
                )
            })?;

        info!(bucket = %self.bucket, key = %key, "S3 delete successful");
        Ok(())
    }
}
