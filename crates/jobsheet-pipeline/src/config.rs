use std::time::Duration;

/// Everything the pipeline needs from the outside world, passed in at
/// construction. Nothing here is ambient — the original form kept its
/// webhook URL as a module global, which this rendition deliberately drops.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    /// Exhibit bucket name.
    pub bucket: String,
    /// Region the bucket lives in, used to derive public URLs.
    pub region: String,
    /// Records-table REST endpoint; one flat JSON row per POST.
    pub records_url: String,
    /// API key sent with each insert.
    pub records_api_key: String,
    /// Outbound notification webhook. `None` disables the step.
    pub webhook_url: Option<String>,
    /// Timeout applied to the insert and webhook HTTP calls.
    pub http_timeout: Duration,
    /// Attempts for each exhibit upload. 1 = fail-fast, the historical
    /// behavior; retries are opt-in.
    pub upload_attempts: u32,
    /// Attempts for the record insert. Same default.
    pub persist_attempts: u32,
}

impl SubmitConfig {
    pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(
        bucket: impl Into<String>,
        region: impl Into<String>,
        records_url: impl Into<String>,
        records_api_key: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            records_url: records_url.into(),
            records_api_key: records_api_key.into(),
            webhook_url: None,
            http_timeout: Self::DEFAULT_HTTP_TIMEOUT,
            upload_attempts: 1,
            persist_attempts: 1,
        }
    }
}
