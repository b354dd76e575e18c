//! SMS sender implementations.

pub mod memory;
pub mod sns;

pub use memory::InMemorySms;
pub use sns::SnsSms;
