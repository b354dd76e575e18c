//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Settings for the decoded-claims cache used by the auth extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Time-to-live for cached decoded claims, in seconds.
    #[serde(default = "default_claims_ttl")]
    pub claims_cache_ttl_seconds: u64,
    /// Maximum number of cached claim entries.
    #[serde(default = "default_claims_capacity")]
    pub claims_cache_capacity: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            claims_cache_ttl_seconds: default_claims_ttl(),
            claims_cache_capacity: default_claims_capacity(),
        }
    }
}

fn default_claims_ttl() -> u64 {
    300
}

fn default_claims_capacity() -> u64 {
    10_000
}
