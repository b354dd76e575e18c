//! SMS dispatch port.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for SMS delivery (SNS or in-memory).
#[async_trait]
pub trait SmsSender: Send + Sync + std::fmt::Debug + 'static {
    /// Send a text message to a phone number in E.164 format.
    async fn send(&self, phone_number: &str, text: &str) -> AppResult<()>;
}
