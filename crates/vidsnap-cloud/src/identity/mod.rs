//! Identity provider implementations.

pub mod http;
pub mod memory;

pub use http::HttpIdentityProvider;
pub use memory::InMemoryIdentityProvider;
