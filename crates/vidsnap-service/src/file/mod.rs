//! File lifecycle workflow: upload, status updates, downloads, deletion.

pub mod service;

pub use service::{CreateFileParams, FileService, UpdateFileParams, UploadedVideo};
