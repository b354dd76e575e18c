//! Identity provider port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Profile of a user as known to the external identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Opaque user identifier (the token subject).
    pub id: String,
    /// Display username.
    pub username: String,
    /// E-mail address, if registered.
    pub email: Option<String>,
    /// Phone number in E.164 format, if registered.
    pub phone_number: Option<String>,
}

/// Trait for resolving user profiles from the external identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Look up the profile for a user id.
    ///
    /// Fails with an identity error when the provider does not know the
    /// user; that failure propagates out of the file update flow and
    /// surfaces as a server error.
    async fn lookup(&self, user_id: &str) -> AppResult<UserProfile>;
}
