//! jobsheet-storage
//!
//! S3 operations for exhibit uploads. Thin wrapper around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod objects;
