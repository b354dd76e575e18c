//! In-memory object storage implementation.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use vidsnap_core::error::AppError;
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::ObjectStorage;

/// Object storage held entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    objects: DashMap<String, Bytes>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored bytes for a key, if present.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.objects.get(key).map(|e| e.value().clone())
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl ObjectStorage for InMemoryStorage {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn upload(&self, key: &str, data: Bytes, _content_type: Option<&str>) -> AppResult<()> {
        self.objects.insert(key.to_string(), data);
        Ok(())
    }

    async fn signed_url(&self, key: &str) -> AppResult<String> {
        if !self.objects.contains_key(key) {
            return Err(AppError::storage(format!("Object {key} not found")));
        }
        Ok(format!("memory://{key}"))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.objects.remove(key);
        Ok(())
    }
}
