use std::future::Future;
use std::pin::Pin;

use jobsheet_core::models::flat_record::FlatRecord;

use crate::error::SubmitError;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object storage for uploaded exhibits.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ExhibitStore: Send + Sync {
    /// Store PDF bytes under `key`. Keys are create-only: storing to an
    /// existing key is an error, never an overwrite.
    fn store<'a>(&'a self, key: &'a str, bytes: Vec<u8>) -> BoxFuture<'a, Result<(), SubmitError>>;

    /// The public URL an object will have once stored under `key`.
    fn public_url(&self, key: &str) -> String;
}

/// The hosted records table. Insert-only; this system never reads rows back.
pub trait RecordSink: Send + Sync {
    fn insert<'a>(&'a self, record: &'a FlatRecord) -> BoxFuture<'a, Result<(), SubmitError>>;
}

/// Outbound notification of a persisted record.
pub trait Notifier: Send + Sync {
    fn notify<'a>(&'a self, record: &'a FlatRecord) -> BoxFuture<'a, Result<(), SubmitError>>;
}

/// Exhibit store backed by an S3 bucket with public-read objects.
pub struct S3ExhibitStore {
    s3: aws_sdk_s3::Client,
    bucket: String,
    region: String,
}

impl S3ExhibitStore {
    pub fn new(s3: aws_sdk_s3::Client, bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            s3,
            bucket: bucket.into(),
            region: region.into(),
        }
    }
}

impl ExhibitStore for S3ExhibitStore {
    fn store<'a>(&'a self, key: &'a str, bytes: Vec<u8>) -> BoxFuture<'a, Result<(), SubmitError>> {
        Box::pin(async move {
            jobsheet_storage::objects::put_object_if_absent(
                &self.s3,
                &self.bucket,
                key,
                bytes,
                Some(jobsheet_core::exhibits::PDF_MEDIA_TYPE),
            )
            .await
            .map_err(|e| SubmitError::Upload {
                name: key.to_string(),
                message: e.to_string(),
            })
        })
    }

    fn public_url(&self, key: &str) -> String {
        jobsheet_storage::objects::public_url(&self.bucket, &self.region, key)
    }
}

/// Records table behind a REST endpoint: one flat JSON row per POST,
/// authenticated with an API-key header.
pub struct RestRecordSink {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl RestRecordSink {
    pub fn new(client: reqwest::Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

impl RecordSink for RestRecordSink {
    fn insert<'a>(&'a self, record: &'a FlatRecord) -> BoxFuture<'a, Result<(), SubmitError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(&self.url)
                .header("x-api-key", &self.api_key)
                .json(record)
                .send()
                .await
                .map_err(|e| SubmitError::Persist(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SubmitError::Persist(format!(
                    "records endpoint returned {status}: {body}"
                )));
            }
            Ok(())
        })
    }
}

/// Webhook notifier: POST the flat record as JSON, ignore the response body.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl Notifier for WebhookNotifier {
    fn notify<'a>(&'a self, record: &'a FlatRecord) -> BoxFuture<'a, Result<(), SubmitError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(&self.url)
                .json(record)
                .send()
                .await
                .map_err(|e| SubmitError::Notify(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(SubmitError::Notify(format!("webhook returned {status}")));
            }
            Ok(())
        })
    }
}
