//! # vidsnap-service
//!
//! Business logic service layer for VidSnap. Services orchestrate the
//! repository and cloud provider ports to implement the upload and
//! notification workflows.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod file;
pub mod notification;

pub use file::{CreateFileParams, FileService, UpdateFileParams, UploadedVideo};
pub use notification::{CreateNotificationParams, NotificationService};
