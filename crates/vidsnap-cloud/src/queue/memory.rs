//! In-memory conversion queue implementation.

use std::sync::Mutex;

use async_trait::async_trait;

use vidsnap_core::result::AppResult;
use vidsnap_core::traits::{ConversionJob, ConversionQueue};

/// Conversion queue that records published jobs in memory.
#[derive(Debug, Default)]
pub struct InMemoryQueue {
    jobs: Mutex<Vec<ConversionJob>>,
}

impl InMemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot of all published jobs.
    pub fn published(&self) -> Vec<ConversionJob> {
        self.jobs.lock().map(|j| j.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ConversionQueue for InMemoryQueue {
    async fn publish(&self, job: &ConversionJob) -> AppResult<()> {
        if let Ok(mut jobs) = self.jobs.lock() {
            jobs.push(job.clone());
        }
        Ok(())
    }
}
