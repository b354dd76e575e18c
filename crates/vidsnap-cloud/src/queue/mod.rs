//! Conversion queue implementations.

pub mod memory;
pub mod sqs;

pub use memory::InMemoryQueue;
pub use sqs::SqsQueue;
