//! TTL cache for decoded token claims.

use std::time::Duration;

use moka::future::Cache;

use vidsnap_core::config::AuthConfig;

use super::claims::AuthenticatedUser;

/// Bounded TTL cache keyed by the raw token string.
///
/// An explicit component injected into the application state, so tests
/// can construct and inspect their own instance.
#[derive(Clone)]
pub struct ClaimsCache {
    cache: Cache<String, AuthenticatedUser>,
}

impl ClaimsCache {
    /// Create a new claims cache from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(config.claims_cache_capacity)
                .time_to_live(Duration::from_secs(config.claims_cache_ttl_seconds))
                .build(),
        }
    }

    /// Look up the cached user for a raw token.
    pub async fn get(&self, token: &str) -> Option<AuthenticatedUser> {
        self.cache.get(token).await
    }

    /// Cache the decoded user for a raw token.
    pub async fn insert(&self, token: String, user: AuthenticatedUser) {
        self.cache.insert(token, user).await;
    }
}

impl std::fmt::Debug for ClaimsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimsCache")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}
