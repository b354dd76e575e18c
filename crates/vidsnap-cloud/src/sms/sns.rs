//! SNS SMS sender implementation.

use async_trait::async_trait;
use aws_sdk_sns::Client;
use tracing::info;

use vidsnap_core::error::{AppError, ErrorKind};
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::SmsSender;

/// SMS delivery via SNS direct publish.
#[derive(Debug, Clone)]
pub struct SnsSms {
    client: Client,
}

impl SnsSms {
    /// Create a new SNS SMS sender.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SmsSender for SnsSms {
    async fn send(&self, phone_number: &str, text: &str) -> AppResult<()> {
        let output = self
            .client
            .publish()
            .phone_number(phone_number)
            .message(text)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Sms, "Failed to publish SMS message", e)
            })?;

        info!(message_id = ?output.message_id(), "SMS published");
        Ok(())
    }
}
