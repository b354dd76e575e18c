//! File domain entities.

pub mod model;
pub mod status;

pub use model::{CreateFile, File};
pub use status::FileStatus;
