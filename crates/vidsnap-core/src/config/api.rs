//! Public API configuration.

use serde::{Deserialize, Serialize};

/// Settings for externally visible URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Public base URL of this service, used to build download links
    /// embedded in notification texts.
    pub base_url: String,
}
