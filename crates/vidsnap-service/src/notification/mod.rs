//! Notification workflow: persisted records plus best-effort SMS.

pub mod messages;
pub mod service;

pub use service::{CreateNotificationParams, NotificationService};
