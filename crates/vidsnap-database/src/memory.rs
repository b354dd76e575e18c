//! In-memory repository implementations.
//!
//! Backs the `memory` provider so the service can run without Postgres,
//! e.g. in integration tests or local smoke runs.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use vidsnap_core::error::AppError;
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::{FileStore, NotificationStore};
use vidsnap_entity::file::model::{CreateFile, File};
use vidsnap_entity::file::status::FileStatus;
use vidsnap_entity::notification::model::{CreateNotification, Notification};

/// DashMap-backed file store.
#[derive(Debug, Default)]
pub struct InMemoryFileStore {
    files: DashMap<Uuid, File>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn find_all(&self) -> AppResult<Vec<File>> {
        let mut files: Vec<File> = self.files.iter().map(|e| e.value().clone()).collect();
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(files)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<File>> {
        Ok(self.files.get(&id).map(|e| e.value().clone()))
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<File>> {
        let mut files: Vec<File> = self
            .files
            .iter()
            .filter(|e| e.value().user_id == user_id)
            .map(|e| e.value().clone())
            .collect();
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(files)
    }

    async fn insert(&self, data: &CreateFile) -> AppResult<File> {
        let now = Utc::now();
        let file = File {
            id: Uuid::new_v4(),
            user_id: data.user_id.clone(),
            video_url: Some(data.video_url.clone()),
            images_compressed_url: None,
            screenshots_time: data.screenshots_time,
            status: FileStatus::Initialized,
            created_at: now,
            updated_at: now,
        };
        self.files.insert(file.id, file.clone());
        Ok(file)
    }

    async fn update(&self, file: &File) -> AppResult<File> {
        if !self.files.contains_key(&file.id) {
            return Err(AppError::not_found(format!("File {} not found", file.id)));
        }
        let mut updated = file.clone();
        updated.updated_at = Utc::now();
        self.files.insert(updated.id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.files.remove(&id).is_some())
    }
}

/// DashMap-backed notification store.
#[derive(Debug, Default)]
pub struct InMemoryNotificationStore {
    notifications: DashMap<Uuid, Notification>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        Ok(self.notifications.get(&id).map(|e| e.value().clone()))
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Notification>> {
        let mut notifs: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|e| e.value().user_id == user_id)
            .map(|e| e.value().clone())
            .collect();
        notifs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifs)
    }

    async fn insert(&self, data: &CreateNotification) -> AppResult<Notification> {
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: data.user_id.clone(),
            file_id: data.file_id,
            notification_type: data.notification_type,
            text: data.text.clone(),
            created_at: Utc::now(),
        };
        self.notifications
            .insert(notification.id, notification.clone());
        Ok(notification)
    }
}
