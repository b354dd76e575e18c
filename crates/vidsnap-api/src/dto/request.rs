//! Request DTOs.

use serde::{Deserialize, Serialize};

use vidsnap_entity::file::FileStatus;

/// Body of `PUT /files/{file_id}`, sent by the conversion worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFileRequest {
    /// Storage key of the derived compressed-image archive.
    pub compressed_file_key: String,
    /// The new file status.
    pub status: FileStatus,
}
