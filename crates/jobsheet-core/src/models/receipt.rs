use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Returned to the form after a successful submission. The UI shows the
/// confirmation and starts a fresh draft.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitReceipt {
    pub id: Uuid,
    pub submitted_at: jiff::Timestamp,
    pub exhibit_count: usize,
    pub exhibit_urls: Vec<String>,
}
