//! Postgres-backed repository implementations.

pub mod file;
pub mod notification;

pub use file::FileRepository;
pub use notification::NotificationRepository;
