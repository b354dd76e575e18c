//! Repository ports for persistent storage.

use async_trait::async_trait;
use uuid::Uuid;

use vidsnap_entity::file::{CreateFile, File};
use vidsnap_entity::notification::{CreateNotification, Notification};

use crate::error::AppError;
use crate::result::AppResult;

/// Repository port for file rows.
#[async_trait]
pub trait FileStore: Send + Sync + std::fmt::Debug + 'static {
    /// List all files.
    async fn find_all(&self) -> AppResult<Vec<File>>;

    /// Find a file by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<File>>;

    /// Find a file by id, failing with a not-found error when absent.
    async fn find_by_id_or_fail(&self, id: Uuid) -> AppResult<File> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }

    /// List files owned by a user.
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<File>>;

    /// Insert a new file row with status `initialized`.
    async fn insert(&self, data: &CreateFile) -> AppResult<File>;

    /// Persist an updated file row. Fails with not-found when absent.
    async fn update(&self, file: &File) -> AppResult<File>;

    /// Delete a file row. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Repository port for notification rows.
#[async_trait]
pub trait NotificationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a notification by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>>;

    /// List notifications for a user.
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Notification>>;

    /// Insert a new notification row.
    async fn insert(&self, data: &CreateNotification) -> AppResult<Notification>;
}
