//! Construction of the cloud provider set from configuration.

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use tracing::info;

use vidsnap_core::config::AwsConfig;
use vidsnap_core::error::AppError;
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::{ConversionQueue, IdentityProvider, ObjectStorage, SmsSender};

use crate::identity::{HttpIdentityProvider, InMemoryIdentityProvider};
use crate::queue::{InMemoryQueue, SqsQueue};
use crate::sms::{InMemorySms, SnsSms};
use crate::storage::{InMemoryStorage, S3Storage};

/// The full set of cloud provider ports, selected once at startup.
#[derive(Debug, Clone)]
pub struct CloudProviders {
    pub storage: Arc<dyn ObjectStorage>,
    pub queue: Arc<dyn ConversionQueue>,
    pub sms: Arc<dyn SmsSender>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl CloudProviders {
    /// Build providers according to `config.provider`.
    ///
    /// `"aws"` builds SDK clients against the configured region (and
    /// endpoint override, when set); `"memory"` builds in-process
    /// implementations suitable for tests and local runs.
    pub async fn build(config: &AwsConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "aws" => Self::build_aws(config).await,
            "memory" => Ok(Self::build_memory()),
            other => Err(AppError::configuration(format!(
                "Unknown cloud provider: {other}"
            ))),
        }
    }

    async fn build_aws(config: &AwsConfig) -> AppResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        info!(
            region = %config.region,
            bucket = %config.bucket,
            endpoint_url = ?config.endpoint_url,
            "Initializing AWS providers"
        );

        Ok(Self {
            storage: Arc::new(S3Storage::new(
                aws_sdk_s3::Client::new(&sdk_config),
                &config.bucket,
            )),
            queue: Arc::new(SqsQueue::new(
                aws_sdk_sqs::Client::new(&sdk_config),
                &config.queue_url,
            )),
            sms: Arc::new(SnsSms::new(aws_sdk_sns::Client::new(&sdk_config))),
            identity: Arc::new(HttpIdentityProvider::new(&config.identity_url)),
        })
    }

    /// Build the in-memory provider set.
    pub fn build_memory() -> Self {
        info!("Initializing in-memory providers");
        Self {
            storage: Arc::new(InMemoryStorage::new()),
            queue: Arc::new(InMemoryQueue::new()),
            sms: Arc::new(InMemorySms::new()),
            identity: Arc::new(InMemoryIdentityProvider::new()),
        }
    }
}
