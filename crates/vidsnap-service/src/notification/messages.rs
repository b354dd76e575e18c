//! Notification text and kind derivation from file status.

use uuid::Uuid;

use vidsnap_entity::file::FileStatus;
use vidsnap_entity::notification::NotificationKind;

/// Derive the notification text for a file status change.
///
/// Only the `processed` text carries actionable content: a download link
/// built from the public API base URL. `initialized` yields an empty
/// text since there is nothing to tell the user yet.
pub fn text_for_status(status: FileStatus, base_url: &str, file_id: Uuid) -> String {
    let base = base_url.trim_end_matches('/');
    match status {
        FileStatus::Processed => format!(
            "Your video has been processed. Download your images here: {base}/files/{file_id}/download"
        ),
        FileStatus::Processing => "Your video is being processed.".to_string(),
        FileStatus::Error => {
            "Your video could not be processed. Please try uploading it again.".to_string()
        }
        FileStatus::Initialized => String::new(),
    }
}

/// Derive the notification kind: only the `error` status is an error.
pub fn kind_for_status(status: FileStatus) -> NotificationKind {
    match status {
        FileStatus::Error => NotificationKind::Error,
        _ => NotificationKind::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_text_embeds_download_link() {
        let id = Uuid::new_v4();
        let text = text_for_status(FileStatus::Processed, "http://localhost:3334/", id);
        assert!(text.contains(&format!("http://localhost:3334/files/{id}/download")));
    }

    #[test]
    fn initialized_text_is_empty() {
        let text = text_for_status(FileStatus::Initialized, "http://localhost:3334", Uuid::new_v4());
        assert!(text.is_empty());
    }

    #[test]
    fn only_error_status_maps_to_error_kind() {
        assert_eq!(kind_for_status(FileStatus::Error), NotificationKind::Error);
        assert_eq!(
            kind_for_status(FileStatus::Processed),
            NotificationKind::Success
        );
        assert_eq!(
            kind_for_status(FileStatus::Processing),
            NotificationKind::Success
        );
        assert_eq!(
            kind_for_status(FileStatus::Initialized),
            NotificationKind::Success
        );
    }
}
