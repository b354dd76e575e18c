//! SQS conversion queue implementation.

use async_trait::async_trait;
use aws_sdk_sqs::Client;
use tracing::info;

use vidsnap_core::error::{AppError, ErrorKind};
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::{ConversionJob, ConversionQueue};

/// Conversion job queue backed by SQS.
#[derive(Debug, Clone)]
pub struct SqsQueue {
    client: Client,
    queue_url: String,
}

impl SqsQueue {
    /// Create a new SQS queue publisher.
    pub fn new(client: Client, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
        }
    }
}

#[async_trait]
impl ConversionQueue for SqsQueue {
    async fn publish(&self, job: &ConversionJob) -> AppResult<()> {
        let body = serde_json::to_string(job)?;

        let output = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Queue,
                    format!("Failed to publish conversion job for file {}", job.file_id),
                    e,
                )
            })?;

        info!(
            file_id = %job.file_id,
            message_id = ?output.message_id(),
            "Conversion job published"
        );
        Ok(())
    }
}
