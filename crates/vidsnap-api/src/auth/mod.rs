//! Token claims decoding and caching.

pub mod cache;
pub mod claims;

pub use cache::ClaimsCache;
pub use claims::{AuthenticatedUser, Claims};
