//! Object storage implementations.

pub mod memory;
pub mod s3;

pub use memory::InMemoryStorage;
pub use s3::S3Storage;
