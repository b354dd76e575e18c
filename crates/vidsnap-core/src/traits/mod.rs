//! Port traits defined in `vidsnap-core` and implemented by other crates.
//!
//! The database crate implements the store traits; the cloud crate
//! implements the storage, queue, SMS, and identity traits. Tests swap in
//! in-memory implementations of the same traits.

pub mod identity;
pub mod queue;
pub mod sms;
pub mod storage;
pub mod store;

pub use identity::{IdentityProvider, UserProfile};
pub use queue::{ConversionJob, ConversionQueue};
pub use sms::SmsSender;
pub use storage::ObjectStorage;
pub use store::{FileStore, NotificationStore};
