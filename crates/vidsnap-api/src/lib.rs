//! # vidsnap-api
//!
//! HTTP API layer for VidSnap built on Axum.
//!
//! Provides the REST endpoints, authentication extractor with claims
//! caching, DTOs, error mapping, and request logging middleware.

pub mod auth;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
