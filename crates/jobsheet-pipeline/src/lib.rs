//! jobsheet-pipeline
//!
//! The submission pipeline: validate the draft, upload exhibits, flatten the
//! record, persist it, notify the webhook, return a receipt. Collaborators
//! sit behind trait seams so the ordering and failure semantics are unit
//! testable with in-memory fakes.

pub mod config;
pub mod error;
pub mod stores;
pub mod submit;
