//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use vidsnap_core::config::AppConfig;
use vidsnap_service::file::FileService;
use vidsnap_service::notification::NotificationService;

use crate::auth::ClaimsCache;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// File workflow service.
    pub file_service: Arc<FileService>,
    /// Notification service.
    pub notification_service: Arc<NotificationService>,
    /// Decoded-claims cache used by the auth extractor.
    pub claims_cache: Arc<ClaimsCache>,
}
