//! # vidsnap-core
//!
//! Core crate for VidSnap. Contains configuration schemas, the port traits
//! implemented by the database and cloud-provider crates, and the unified
//! error system.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
