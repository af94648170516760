//! jobsheet-core
//!
//! Pure domain types, the field-validation schema, and object-key
//! conventions for the Court Reporter Job Sheet intake. No AWS SDK or
//! HTTP dependency — this is the shared vocabulary of the system.

pub mod exhibits;
pub mod models;
pub mod sample;
pub mod schema;
pub mod storage_keys;
