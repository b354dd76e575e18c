//! # vidsnap-cloud
//!
//! Concrete implementations of the cloud provider ports. The `aws` variants
//! talk to S3, SQS, SNS and the identity HTTP endpoint; the `memory`
//! variants back local runs and integration tests.

pub mod factory;
pub mod identity;
pub mod queue;
pub mod sms;
pub mod storage;

pub use factory::CloudProviders;
