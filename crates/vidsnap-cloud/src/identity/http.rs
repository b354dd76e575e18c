//! HTTP identity provider implementation.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use vidsnap_core::error::{AppError, ErrorKind};
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::{IdentityProvider, UserProfile};

/// Identity provider that resolves user profiles over HTTP.
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIdentityProvider {
    /// Create a new HTTP identity provider rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn lookup(&self, user_id: &str) -> AppResult<UserProfile> {
        let url = format!(
            "{}/user-data?userId={user_id}",
            self.base_url.trim_end_matches('/')
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::with_source(ErrorKind::Identity, "Identity provider unreachable", e)
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::identity(format!("User {user_id} not found")));
        }
        if !response.status().is_success() {
            return Err(AppError::identity(format!(
                "Identity provider returned status {}",
                response.status()
            )));
        }

        let profile: UserProfile = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Identity, "Invalid identity provider response", e)
        })?;

        debug!(user_id = %user_id, "Resolved user profile");
        Ok(profile)
    }
}
