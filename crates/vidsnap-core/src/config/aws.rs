//! Cloud provider configuration.

use serde::{Deserialize, Serialize};

/// Settings for object storage, the conversion queue, SMS, and the
/// identity provider.
///
/// `provider` selects the implementation at construction time:
/// `"aws"` builds real SDK clients, `"memory"` builds deterministic
/// in-memory providers (used by tests and local development).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Provider strategy: "aws" or "memory".
    #[serde(default = "default_provider")]
    pub provider: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Optional endpoint override (LocalStack, MinIO, etc.).
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// S3 bucket holding uploaded videos and derived archives.
    #[serde(default)]
    pub bucket: String,
    /// SQS queue URL for conversion jobs.
    #[serde(default)]
    pub queue_url: String,
    /// Base URL of the identity provider used to resolve user profiles.
    #[serde(default)]
    pub identity_url: String,
}

fn default_provider() -> String {
    "aws".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}
