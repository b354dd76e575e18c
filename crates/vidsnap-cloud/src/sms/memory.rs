//! In-memory SMS sender implementation.

use std::sync::Mutex;

use async_trait::async_trait;

use vidsnap_core::result::AppResult;
use vidsnap_core::traits::SmsSender;

/// SMS sender that records messages in memory.
#[derive(Debug, Default)]
pub struct InMemorySms {
    sent: Mutex<Vec<(String, String)>>,
}

impl InMemorySms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all (phone_number, text) pairs sent so far.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SmsSender for InMemorySms {
    async fn send(&self, phone_number: &str, text: &str) -> AppResult<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((phone_number.to_string(), text.to_string()));
        }
        Ok(())
    }
}
