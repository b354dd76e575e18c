//! In-memory identity provider implementation.

use async_trait::async_trait;
use dashmap::DashMap;

use vidsnap_core::error::AppError;
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::{IdentityProvider, UserProfile};

/// Identity provider backed by a fixed in-memory registry.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    users: DashMap<String, UserProfile>,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user profile.
    pub fn register(&self, profile: UserProfile) {
        self.users.insert(profile.id.clone(), profile);
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn lookup(&self, user_id: &str) -> AppResult<UserProfile> {
        self.users
            .get(user_id)
            .map(|e| e.value().clone())
            .ok_or_else(|| AppError::identity(format!("User {user_id} not found")))
    }
}
