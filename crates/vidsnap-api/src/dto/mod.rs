//! Request and response DTOs. All wire fields are camelCase.

pub mod request;
pub mod response;
