//! Notification creation and read operations.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use vidsnap_core::config::ApiConfig;
use vidsnap_core::error::AppError;
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::{NotificationStore, SmsSender};
use vidsnap_entity::file::FileStatus;
use vidsnap_entity::notification::{CreateNotification, Notification};

use super::messages;

/// Parameters for creating a notification after a file status change.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    /// The recipient user.
    pub user_id: String,
    /// The file that changed status.
    pub file_id: Uuid,
    /// The new file status.
    pub file_status: FileStatus,
    /// Storage key of the derived archive, empty when unavailable.
    pub images_compressed_url: String,
    /// Recipient phone number in E.164 format, empty when unknown.
    pub user_phone_number: String,
}

/// Persists notifications and dispatches best-effort SMS messages.
#[derive(Debug, Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
    sms: Arc<dyn SmsSender>,
    api_config: ApiConfig,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(
        store: Arc<dyn NotificationStore>,
        sms: Arc<dyn SmsSender>,
        api_config: ApiConfig,
    ) -> Self {
        Self {
            store,
            sms,
            api_config,
        }
    }

    /// Creates and persists a notification, then attempts SMS delivery.
    ///
    /// The row is persisted regardless of the SMS outcome; delivery
    /// failures are logged and swallowed.
    pub async fn create_notification(
        &self,
        params: CreateNotificationParams,
    ) -> AppResult<Notification> {
        if params.file_id.is_nil() {
            return Err(AppError::validation("fileId is required"));
        }
        if params.file_status == FileStatus::Processed && params.images_compressed_url.is_empty() {
            return Err(AppError::validation(
                "imagesCompressedUrl is required for processed files",
            ));
        }

        let text = messages::text_for_status(
            params.file_status,
            &self.api_config.base_url,
            params.file_id,
        );
        let notification = self
            .store
            .insert(&CreateNotification {
                user_id: params.user_id.clone(),
                file_id: params.file_id,
                notification_type: messages::kind_for_status(params.file_status),
                text: text.clone(),
            })
            .await?;

        info!(
            notification_id = %notification.id,
            file_id = %params.file_id,
            status = %params.file_status,
            "Notification created"
        );

        if !params.user_phone_number.is_empty() {
            if let Err(err) = self.sms.send(&params.user_phone_number, &text).await {
                error!(
                    notification_id = %notification.id,
                    error = %err,
                    "Failed to send SMS, notification persisted anyway"
                );
            }
        }

        Ok(notification)
    }

    /// Fetches a notification by id.
    pub async fn get_notification_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        self.store.find_by_id(id).await
    }

    /// Lists notifications for a user.
    pub async fn get_notifications_by_user(&self, user_id: &str) -> AppResult<Vec<Notification>> {
        self.store.find_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use vidsnap_cloud::sms::InMemorySms;
    use vidsnap_database::memory::InMemoryNotificationStore;
    use vidsnap_entity::notification::NotificationKind;

    #[derive(Debug)]
    struct FailingSms;

    #[async_trait]
    impl SmsSender for FailingSms {
        async fn send(&self, _phone_number: &str, _text: &str) -> AppResult<()> {
            Err(AppError::sms("SNS publish rejected"))
        }
    }

    fn service_with(sms: Arc<dyn SmsSender>) -> (NotificationService, Arc<InMemoryNotificationStore>) {
        let store = Arc::new(InMemoryNotificationStore::new());
        let service = NotificationService::new(
            store.clone(),
            sms,
            ApiConfig {
                base_url: "http://localhost:3334".to_string(),
            },
        );
        (service, store)
    }

    fn params(status: FileStatus) -> CreateNotificationParams {
        CreateNotificationParams {
            user_id: "user-1".to_string(),
            file_id: Uuid::new_v4(),
            file_status: status,
            images_compressed_url: "archive.zip".to_string(),
            user_phone_number: String::new(),
        }
    }

    #[tokio::test]
    async fn nil_file_id_is_rejected() {
        let (service, _) = service_with(Arc::new(InMemorySms::new()));
        let mut p = params(FileStatus::Processed);
        p.file_id = Uuid::nil();
        let err = service.create_notification(p).await.unwrap_err();
        assert_eq!(err.kind, vidsnap_core::error::ErrorKind::Validation);
    }

    #[tokio::test]
    async fn processed_without_archive_key_is_rejected() {
        let (service, _) = service_with(Arc::new(InMemorySms::new()));
        let mut p = params(FileStatus::Processed);
        p.images_compressed_url = String::new();
        let err = service.create_notification(p).await.unwrap_err();
        assert_eq!(err.kind, vidsnap_core::error::ErrorKind::Validation);
    }

    #[tokio::test]
    async fn processing_without_phone_persists_and_skips_sms() {
        let sms = Arc::new(InMemorySms::new());
        let (service, store) = service_with(sms.clone());

        let created = service
            .create_notification(params(FileStatus::Processing))
            .await
            .unwrap();

        assert_eq!(created.notification_type, NotificationKind::Success);
        assert!(store.find_by_id(created.id).await.unwrap().is_some());
        assert!(sms.sent().is_empty());
    }

    #[tokio::test]
    async fn sms_receives_derived_text() {
        let sms = Arc::new(InMemorySms::new());
        let (service, _) = service_with(sms.clone());

        let mut p = params(FileStatus::Processed);
        p.user_phone_number = "+15550000001".to_string();
        let created = service.create_notification(p).await.unwrap();

        let sent = sms.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+15550000001");
        assert_eq!(sent[0].1, created.text);
        assert!(created.text.contains(&format!("/files/{}/download", created.file_id)));
    }

    #[tokio::test]
    async fn sms_failure_is_swallowed() {
        let (service, store) = service_with(Arc::new(FailingSms));

        let mut p = params(FileStatus::Error);
        p.user_phone_number = "+15550000002".to_string();
        let created = service.create_notification(p).await.unwrap();

        assert_eq!(created.notification_type, NotificationKind::Error);
        assert!(store.find_by_id(created.id).await.unwrap().is_some());
    }
}
