//! File service orchestrating storage, persistence, and job dispatch.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::{error, info};
use uuid::Uuid;

use vidsnap_core::error::AppError;
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::{
    ConversionJob, ConversionQueue, FileStore, IdentityProvider, ObjectStorage,
};
use vidsnap_entity::file::{CreateFile, File, FileStatus};

use crate::notification::{CreateNotificationParams, NotificationService};

/// File extensions accepted for upload (lowercase).
const ALLOWED_EXTENSIONS: [&str; 6] = ["mp4", "mov", "mkv", "avi", "wmv", "webm"];

/// Inclusive bounds for the screenshot interval, in seconds.
const MIN_SCREENSHOTS_TIME: f64 = 0.1;
const MAX_SCREENSHOTS_TIME: f64 = 30.0;

/// An uploaded video as received from the multipart form.
#[derive(Debug, Clone)]
pub struct UploadedVideo {
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the client.
    pub content_type: Option<String>,
    /// File content.
    pub data: Bytes,
}

/// Parameters for creating a file.
#[derive(Debug, Clone)]
pub struct CreateFileParams {
    /// The owning user.
    pub user_id: String,
    /// Screenshot interval in seconds.
    pub screenshots_time: f64,
}

/// Parameters for the worker-reported file update.
#[derive(Debug, Clone)]
pub struct UpdateFileParams {
    /// The file to update.
    pub id: Uuid,
    /// Storage key of the derived archive.
    pub compressed_file_key: String,
    /// The new status reported by the worker.
    pub status: FileStatus,
}

/// Orchestrates the video upload and conversion coordination workflow.
#[derive(Debug, Clone)]
pub struct FileService {
    files: Arc<dyn FileStore>,
    storage: Arc<dyn ObjectStorage>,
    queue: Arc<dyn ConversionQueue>,
    identity: Arc<dyn IdentityProvider>,
    notifications: Arc<NotificationService>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        files: Arc<dyn FileStore>,
        storage: Arc<dyn ObjectStorage>,
        queue: Arc<dyn ConversionQueue>,
        identity: Arc<dyn IdentityProvider>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            files,
            storage,
            queue,
            identity,
            notifications,
        }
    }

    /// Accepts an uploaded video: validates it, stores it, persists the
    /// file row, and publishes the conversion job.
    ///
    /// Queue publish failures propagate to the caller; by then the video
    /// is already in storage and the row persisted.
    pub async fn create_file(
        &self,
        params: CreateFileParams,
        upload: Option<UploadedVideo>,
    ) -> AppResult<File> {
        let upload = upload.ok_or_else(|| AppError::validation("No video file provided"))?;

        if !(MIN_SCREENSHOTS_TIME..=MAX_SCREENSHOTS_TIME).contains(&params.screenshots_time) {
            return Err(AppError::validation(format!(
                "screenshotsTime must be between {MIN_SCREENSHOTS_TIME} and {MAX_SCREENSHOTS_TIME} seconds"
            )));
        }
        if !has_allowed_extension(&upload.file_name) {
            return Err(AppError::validation(format!(
                "Unsupported video format, expected one of: {}",
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }
        let screenshots_time = Decimal::from_f64(params.screenshots_time).ok_or_else(|| {
            AppError::validation("screenshotsTime is not a representable number")
        })?;

        let key = format!(
            "{}/videos/{}_{}",
            params.user_id,
            Utc::now().timestamp_millis(),
            upload.file_name
        );

        self.storage
            .upload(&key, upload.data, upload.content_type.as_deref())
            .await?;

        let file = self
            .files
            .insert(&CreateFile {
                user_id: params.user_id.clone(),
                video_url: key.clone(),
                screenshots_time,
            })
            .await?;

        self.queue
            .publish(&ConversionJob {
                file_name: upload.file_name,
                file_storage_key: key,
                user_id: params.user_id,
                file_id: file.id,
                screenshots_time,
            })
            .await?;

        info!(file_id = %file.id, user_id = %file.user_id, "File created and job enqueued");
        Ok(file)
    }

    /// Applies a worker-reported status update and notifies the owner.
    ///
    /// Identity lookup failures propagate; notification creation failures
    /// are logged and swallowed so the update itself still succeeds.
    pub async fn update_file(&self, params: UpdateFileParams) -> AppResult<File> {
        let mut file = self.files.find_by_id_or_fail(params.id).await?;
        file.images_compressed_url = Some(params.compressed_file_key);
        file.status = params.status;
        let updated = self.files.update(&file).await?;

        let profile = self.identity.lookup(&updated.user_id).await?;

        let notification = CreateNotificationParams {
            user_id: updated.user_id.clone(),
            file_id: updated.id,
            file_status: updated.status,
            images_compressed_url: updated.images_compressed_url.clone().unwrap_or_default(),
            user_phone_number: profile.phone_number.unwrap_or_default(),
        };
        if let Err(err) = self.notifications.create_notification(notification).await {
            error!(file_id = %updated.id, error = %err, "Failed to create notification");
        }

        info!(file_id = %updated.id, status = %updated.status, "File updated");
        Ok(updated)
    }

    /// Produces a time-limited signed URL for a file's derived archive.
    pub async fn get_signed_url(&self, file_id: Uuid) -> AppResult<String> {
        let file = self.files.find_by_id_or_fail(file_id).await?;
        self.storage.signed_url(&file.images_storage_path()).await
    }

    /// Deletes a file row and its derived archive object.
    ///
    /// The row is deleted first; a missing file fails before any storage
    /// call is made.
    pub async fn delete_file(&self, file_id: Uuid) -> AppResult<()> {
        let file = self.files.find_by_id_or_fail(file_id).await?;
        self.files.delete(file_id).await?;
        self.storage.delete(&file.images_storage_path()).await?;

        info!(file_id = %file_id, "File deleted");
        Ok(())
    }

    /// Lists all files.
    pub async fn get_files(&self) -> AppResult<Vec<File>> {
        self.files.find_all().await
    }

    /// Fetches a file by id.
    pub async fn get_file_by_id(&self, id: Uuid) -> AppResult<Option<File>> {
        self.files.find_by_id(id).await
    }

    /// Lists files owned by a user.
    pub async fn get_files_by_user(&self, user_id: &str) -> AppResult<Vec<File>> {
        self.files.find_by_user(user_id).await
    }
}

/// Case-insensitive suffix match against the accepted video extensions.
fn has_allowed_extension(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    use vidsnap_cloud::identity::InMemoryIdentityProvider;
    use vidsnap_cloud::queue::InMemoryQueue;
    use vidsnap_cloud::sms::InMemorySms;
    use vidsnap_cloud::storage::InMemoryStorage;
    use vidsnap_core::config::ApiConfig;
    use vidsnap_core::error::ErrorKind;
    use vidsnap_core::traits::{NotificationStore, UserProfile};
    use vidsnap_database::memory::{InMemoryFileStore, InMemoryNotificationStore};

    struct Harness {
        service: FileService,
        storage: Arc<InMemoryStorage>,
        queue: Arc<InMemoryQueue>,
        sms: Arc<InMemorySms>,
        identity: Arc<InMemoryIdentityProvider>,
        notifications: Arc<InMemoryNotificationStore>,
    }

    fn harness() -> Harness {
        let files = Arc::new(InMemoryFileStore::new());
        let storage = Arc::new(InMemoryStorage::new());
        let queue = Arc::new(InMemoryQueue::new());
        let sms = Arc::new(InMemorySms::new());
        let identity = Arc::new(InMemoryIdentityProvider::new());
        let notifications = Arc::new(InMemoryNotificationStore::new());

        let notification_service = Arc::new(NotificationService::new(
            notifications.clone(),
            sms.clone(),
            ApiConfig {
                base_url: "http://localhost:3334".to_string(),
            },
        ));
        let service = FileService::new(
            files,
            storage.clone(),
            queue.clone(),
            identity.clone(),
            notification_service,
        );

        Harness {
            service,
            storage,
            queue,
            sms,
            identity,
            notifications,
        }
    }

    fn upload(name: &str) -> Option<UploadedVideo> {
        Some(UploadedVideo {
            file_name: name.to_string(),
            content_type: Some("video/mp4".to_string()),
            data: Bytes::from_static(b"fake video bytes"),
        })
    }

    fn create_params(screenshots_time: f64) -> CreateFileParams {
        CreateFileParams {
            user_id: "user-1".to_string(),
            screenshots_time,
        }
    }

    #[tokio::test]
    async fn missing_upload_is_rejected() {
        let h = harness();
        let err = h
            .service
            .create_file(create_params(30.0), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("video file"));
    }

    #[tokio::test]
    async fn screenshots_time_bounds_are_inclusive() {
        let h = harness();
        for rejected in [0.05, 31.0] {
            let err = h
                .service
                .create_file(create_params(rejected), upload("clip.mp4"))
                .await
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
        for accepted in [0.1, 30.0] {
            h.service
                .create_file(create_params(accepted), upload("clip.mp4"))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn extension_check_is_case_insensitive_suffix_match() {
        let h = harness();

        let err = h
            .service
            .create_file(create_params(30.0), upload("video.txt"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        for name in [
            "a.mp4", "a.mov", "a.mkv", "a.avi", "a.wmv", "a.webm", "A.MP4", "clip.mp4.WEBM",
        ] {
            h.service
                .create_file(create_params(30.0), upload(name))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn create_file_stores_persists_and_enqueues() {
        let h = harness();
        let file = h
            .service
            .create_file(create_params(15.5), upload("holiday.mp4"))
            .await
            .unwrap();

        assert_eq!(file.status, FileStatus::Initialized);
        assert!(file.images_compressed_url.is_none());
        let key = file.video_url.clone().unwrap();
        assert!(key.starts_with("user-1/videos/"));
        assert!(key.ends_with("_holiday.mp4"));
        assert!(h.storage.get(&key).is_some());

        let jobs = h.queue.published();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].file_name, "holiday.mp4");
        assert_eq!(jobs[0].file_storage_key, key);
        assert_eq!(jobs[0].user_id, "user-1");
        assert_eq!(jobs[0].file_id, file.id);
        assert_eq!(jobs[0].screenshots_time, Decimal::from_f64(15.5).unwrap());
    }

    #[tokio::test]
    async fn update_file_persists_and_notifies_owner() {
        let h = harness();
        h.identity.register(UserProfile {
            id: "user-1".to_string(),
            username: "user-1".to_string(),
            email: None,
            phone_number: Some("+15550000001".to_string()),
        });

        let file = h
            .service
            .create_file(create_params(30.0), upload("clip.mp4"))
            .await
            .unwrap();

        let updated = h
            .service
            .update_file(UpdateFileParams {
                id: file.id,
                compressed_file_key: "x.jpg".to_string(),
                status: FileStatus::Processed,
            })
            .await
            .unwrap();

        assert_eq!(updated.status, FileStatus::Processed);
        assert_eq!(updated.images_compressed_url.as_deref(), Some("x.jpg"));

        let notifs = h.notifications.find_by_user("user-1").await.unwrap();
        assert_eq!(notifs.len(), 1);
        assert_eq!(notifs[0].file_id, file.id);

        let sent = h.sms.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+15550000001");
    }

    #[tokio::test]
    async fn update_file_propagates_identity_lookup_failure() {
        let h = harness();
        let file = h
            .service
            .create_file(create_params(30.0), upload("clip.mp4"))
            .await
            .unwrap();

        let err = h
            .service
            .update_file(UpdateFileParams {
                id: file.id,
                compressed_file_key: "x.jpg".to_string(),
                status: FileStatus::Processed,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Identity);
        assert!(h.notifications.find_by_user("user-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_file_on_missing_file_is_not_found() {
        let h = harness();
        let err = h
            .service
            .update_file(UpdateFileParams {
                id: Uuid::new_v4(),
                compressed_file_key: "x.jpg".to_string(),
                status: FileStatus::Processed,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn signed_url_uses_images_path() {
        let h = harness();
        h.identity.register(UserProfile {
            id: "user-1".to_string(),
            username: "user-1".to_string(),
            email: None,
            phone_number: None,
        });

        let file = h
            .service
            .create_file(create_params(30.0), upload("clip.mp4"))
            .await
            .unwrap();
        h.service
            .update_file(UpdateFileParams {
                id: file.id,
                compressed_file_key: "archive.zip".to_string(),
                status: FileStatus::Processed,
            })
            .await
            .unwrap();
        h.storage
            .upload("user-1/images/archive.zip", Bytes::from_static(b"zip"), None)
            .await
            .unwrap();

        let url = h.service.get_signed_url(file.id).await.unwrap();
        assert_eq!(url, "memory://user-1/images/archive.zip");
    }

    #[tokio::test]
    async fn delete_file_removes_row_then_archive() {
        let h = harness();
        h.identity.register(UserProfile {
            id: "user-1".to_string(),
            username: "user-1".to_string(),
            email: None,
            phone_number: None,
        });

        let file = h
            .service
            .create_file(create_params(30.0), upload("clip.mp4"))
            .await
            .unwrap();
        h.service
            .update_file(UpdateFileParams {
                id: file.id,
                compressed_file_key: "archive.zip".to_string(),
                status: FileStatus::Processed,
            })
            .await
            .unwrap();
        h.storage
            .upload("user-1/images/archive.zip", Bytes::from_static(b"zip"), None)
            .await
            .unwrap();

        h.service.delete_file(file.id).await.unwrap();
        assert!(h.service.get_file_by_id(file.id).await.unwrap().is_none());
        assert!(h.storage.get("user-1/images/archive.zip").is_none());
    }

    #[tokio::test]
    async fn delete_missing_file_fails_before_storage() {
        let h = harness();
        let err = h.service.delete_file(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
