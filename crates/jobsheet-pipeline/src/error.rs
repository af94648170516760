use jobsheet_core::schema::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Field validation failed; the pipeline never started.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrors),

    /// An exhibit upload failed. The submission is aborted and no record
    /// is inserted; the client keeps its draft for retry.
    #[error("exhibit upload failed for '{name}': {message}")]
    Upload { name: String, message: String },

    /// The records-table insert failed. The draft is retained client-side;
    /// retry is manual.
    #[error("record insert failed: {0}")]
    Persist(String),

    /// Webhook notification failed. Never surfaced from a submission —
    /// callers swallow it with a warning.
    #[error("webhook notification failed: {0}")]
    Notify(String),
}
