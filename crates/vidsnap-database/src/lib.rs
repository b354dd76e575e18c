//! # vidsnap-database
//!
//! PostgreSQL connection pool management and concrete implementations of
//! the VidSnap repository ports.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
