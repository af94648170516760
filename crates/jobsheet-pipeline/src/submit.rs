use std::sync::Arc;

use jiff::Timestamp;
use uuid::Uuid;

use jobsheet_core::exhibits::{Exhibit, ExhibitSelection};
use jobsheet_core::models::flat_record::FlatRecord;
use jobsheet_core::models::job_sheet::JobSheet;
use jobsheet_core::models::receipt::SubmitReceipt;
use jobsheet_core::{schema, storage_keys};

use crate::config::SubmitConfig;
use crate::error::SubmitError;
use crate::stores::{
    ExhibitStore, Notifier, RecordSink, RestRecordSink, S3ExhibitStore, WebhookNotifier,
};

/// The submission pipeline. Stateless across submissions; every call to
/// [`Pipeline::submit`] is independent.
pub struct Pipeline {
    store: Arc<dyn ExhibitStore>,
    sink: Arc<dyn RecordSink>,
    notifier: Option<Arc<dyn Notifier>>,
    upload_attempts: u32,
    persist_attempts: u32,
}

impl Pipeline {
    pub fn new(
        store: Arc<dyn ExhibitStore>,
        sink: Arc<dyn RecordSink>,
        notifier: Option<Arc<dyn Notifier>>,
        upload_attempts: u32,
        persist_attempts: u32,
    ) -> Self {
        Self {
            store,
            sink,
            notifier,
            upload_attempts: upload_attempts.max(1),
            persist_attempts: persist_attempts.max(1),
        }
    }

    /// Wire up the production collaborators: S3 exhibit store, REST record
    /// sink, and (if configured) the webhook notifier.
    pub fn from_config(config: &SubmitConfig, s3: aws_sdk_s3::Client, http: reqwest::Client) -> Self {
        let store = Arc::new(S3ExhibitStore::new(s3, &config.bucket, &config.region));
        let sink = Arc::new(RestRecordSink::new(
            http.clone(),
            &config.records_url,
            &config.records_api_key,
        ));
        let notifier = config
            .webhook_url
            .as_ref()
            .map(|url| Arc::new(WebhookNotifier::new(http, url)) as Arc<dyn Notifier>);
        Self::new(
            store,
            sink,
            notifier,
            config.upload_attempts,
            config.persist_attempts,
        )
    }

    /// Run one submission end to end.
    ///
    /// Order is fixed: validate, upload every exhibit, flatten, insert,
    /// notify. The first upload failure aborts before anything is inserted;
    /// an insert failure aborts before notification. Notification failures
    /// are logged and swallowed — the submission already succeeded.
    pub async fn submit(
        &self,
        sheet: &JobSheet,
        exhibits: &ExhibitSelection,
        caller_ip: Option<String>,
    ) -> Result<SubmitReceipt, SubmitError> {
        let errors = schema::validate(sheet);
        if !errors.is_empty() {
            return Err(SubmitError::Validation(errors));
        }

        let mut file_names = Vec::with_capacity(exhibits.len());
        let mut file_urls = Vec::with_capacity(exhibits.len());
        for exhibit in exhibits.iter() {
            let key = storage_keys::exhibit(Timestamp::now().as_millisecond(), &exhibit.name);
            self.upload(&key, exhibit).await?;
            file_names.push(exhibit.name.clone());
            file_urls.push(repair_public_url(self.store.public_url(&key)));
        }

        let submitted_at = Timestamp::now();
        let record = FlatRecord::from_sheet(sheet, file_names, file_urls, caller_ip, submitted_at);

        self.persist(&record).await?;

        if let Some(notifier) = &self.notifier {
            if let Err(e) = notifier.notify(&record).await {
                tracing::warn!(error = %e, "webhook notification failed");
            }
        }

        let receipt = SubmitReceipt {
            id: Uuid::new_v4(),
            submitted_at,
            exhibit_count: record.exhibit_file_urls.len(),
            exhibit_urls: record.exhibit_file_urls,
        };
        tracing::info!(
            id = %receipt.id,
            exhibits = receipt.exhibit_count,
            "job sheet submitted"
        );
        Ok(receipt)
    }

    async fn upload(&self, key: &str, exhibit: &Exhibit) -> Result<(), SubmitError> {
        let mut last_err = None;
        for attempt in 1..=self.upload_attempts {
            match self.store.store(key, exhibit.bytes.clone()).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(
                        name = %exhibit.name,
                        attempt,
                        error = %e,
                        "exhibit upload attempt failed"
                    );
                    last_err = Some(e);
                }
            }
        }
        // upload_attempts >= 1, so last_err is set
        Err(last_err.unwrap_or_else(|| SubmitError::Upload {
            name: exhibit.name.clone(),
            message: "no upload attempts configured".to_string(),
        }))
    }

    async fn persist(&self, record: &FlatRecord) -> Result<(), SubmitError> {
        let mut last_err = None;
        for attempt in 1..=self.persist_attempts {
            match self.sink.insert(record).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "record insert attempt failed");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err
            .unwrap_or_else(|| SubmitError::Persist("no persist attempts configured".to_string())))
    }
}

/// Repair a public URL whose leading scheme character was dropped upstream
/// (`"ttps://…"` instead of `"https://…"`).
///
/// This masks a URL-generation bug in the originating system rather than
/// fixing its cause; it is a workaround, not a contract. Remove once the
/// slicing bug upstream is confirmed fixed.
pub fn repair_public_url(url: String) -> String {
    if url.starts_with("ttps://") {
        format!("h{url}")
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::repair_public_url;

    #[test]
    fn repairs_degenerate_scheme() {
        assert_eq!(repair_public_url("ttps://x".to_string()), "https://x");
    }

    #[test]
    fn leaves_well_formed_urls_alone() {
        assert_eq!(repair_public_url("https://x".to_string()), "https://x");
        assert_eq!(repair_public_url("http://x".to_string()), "http://x");
        assert_eq!(repair_public_url("".to_string()), "");
    }
}
