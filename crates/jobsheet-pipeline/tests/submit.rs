use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use jobsheet_core::exhibits::{CandidateFile, ExhibitSelection, PDF_MEDIA_TYPE};
use jobsheet_core::models::flat_record::FlatRecord;
use jobsheet_core::models::job_sheet::JobSheet;
use jobsheet_core::sample::sample_sheet;
use jobsheet_pipeline::error::SubmitError;
use jobsheet_pipeline::stores::{ExhibitStore, Notifier, RecordSink};
use jobsheet_pipeline::submit::Pipeline;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// In-memory exhibit store; optionally fails from the Nth store call on.
#[derive(Default)]
struct FakeStore {
    stored_keys: Mutex<Vec<String>>,
    calls: AtomicUsize,
    fail_from_call: Option<usize>,
    succeed_after: Option<usize>,
    degenerate_urls: bool,
}

impl ExhibitStore for FakeStore {
    fn store<'a>(&'a self, key: &'a str, _bytes: Vec<u8>) -> BoxFuture<'a, Result<(), SubmitError>> {
        Box::pin(async move {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(n) = self.fail_from_call {
                let recovered = self.succeed_after.is_some_and(|after| call > after);
                if call >= n && !recovered {
                    return Err(SubmitError::Upload {
                        name: key.to_string(),
                        message: "storage unavailable".to_string(),
                    });
                }
            }
            self.stored_keys.lock().unwrap().push(key.to_string());
            Ok(())
        })
    }

    fn public_url(&self, key: &str) -> String {
        if self.degenerate_urls {
            // The upstream bug: leading scheme character sliced off.
            format!("ttps://bucket.example/{key}")
        } else {
            format!("https://bucket.example/{key}")
        }
    }
}

#[derive(Default)]
struct FakeSink {
    inserted: Mutex<Vec<FlatRecord>>,
    fail: bool,
}

impl RecordSink for FakeSink {
    fn insert<'a>(&'a self, record: &'a FlatRecord) -> BoxFuture<'a, Result<(), SubmitError>> {
        Box::pin(async move {
            if self.fail {
                return Err(SubmitError::Persist("table rejected the row".to_string()));
            }
            self.inserted.lock().unwrap().push(record.clone());
            Ok(())
        })
    }
}

#[derive(Default)]
struct FakeNotifier {
    notified: AtomicUsize,
    fail: bool,
}

impl Notifier for FakeNotifier {
    fn notify<'a>(&'a self, _record: &'a FlatRecord) -> BoxFuture<'a, Result<(), SubmitError>> {
        Box::pin(async move {
            self.notified.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SubmitError::Notify("webhook unreachable".to_string()));
            }
            Ok(())
        })
    }
}

fn pdf(name: &str) -> CandidateFile {
    CandidateFile {
        name: name.to_string(),
        media_type: PDF_MEDIA_TYPE.to_string(),
        bytes: b"%PDF-1.4".to_vec(),
    }
}

fn selection(names: &[&str]) -> ExhibitSelection {
    let mut sel = ExhibitSelection::new();
    sel.add(names.iter().map(|n| pdf(n)));
    sel
}

fn pipeline(
    store: Arc<FakeStore>,
    sink: Arc<FakeSink>,
    notifier: Option<Arc<FakeNotifier>>,
) -> Pipeline {
    Pipeline::new(
        store,
        sink,
        notifier.map(|n| n as Arc<dyn Notifier>),
        1,
        1,
    )
}

#[tokio::test]
async fn successful_submission_uploads_then_inserts_then_notifies() {
    let store = Arc::new(FakeStore::default());
    let sink = Arc::new(FakeSink::default());
    let notifier = Arc::new(FakeNotifier::default());
    let pipeline = pipeline(store.clone(), sink.clone(), Some(notifier.clone()));

    let receipt = pipeline
        .submit(
            &sample_sheet(),
            &selection(&["a.pdf", "b.pdf"]),
            Some("203.0.113.7".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(store.stored_keys.lock().unwrap().len(), 2);
    let inserted = sink.inserted.lock().unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].exhibit_file_names, vec!["a.pdf", "b.pdf"]);
    assert_eq!(inserted[0].exhibit_file_urls.len(), 2);
    assert_eq!(inserted[0].submitted_ip.as_deref(), Some("203.0.113.7"));
    assert_eq!(notifier.notified.load(Ordering::SeqCst), 1);
    assert_eq!(receipt.exhibit_count, 2);
    assert_eq!(receipt.exhibit_urls, inserted[0].exhibit_file_urls);
}

#[tokio::test]
async fn invalid_draft_blocks_before_any_network_step() {
    let store = Arc::new(FakeStore::default());
    let sink = Arc::new(FakeSink::default());
    let pipeline = pipeline(store.clone(), sink.clone(), None);

    let err = pipeline
        .submit(&JobSheet::default(), &selection(&["a.pdf"]), None)
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Validation(_)));
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    assert!(sink.inserted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upload_failure_aborts_before_insert() {
    let store = Arc::new(FakeStore {
        fail_from_call: Some(2),
        ..FakeStore::default()
    });
    let sink = Arc::new(FakeSink::default());
    let notifier = Arc::new(FakeNotifier::default());
    let pipeline = pipeline(store.clone(), sink.clone(), Some(notifier.clone()));

    let err = pipeline
        .submit(&sample_sheet(), &selection(&["a.pdf", "b.pdf", "c.pdf"]), None)
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Upload { .. }));
    // Second upload failed: the third was never attempted and no row exists.
    assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    assert!(sink.inserted.lock().unwrap().is_empty());
    assert_eq!(notifier.notified.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn persist_failure_skips_notification() {
    let store = Arc::new(FakeStore::default());
    let sink = Arc::new(FakeSink {
        fail: true,
        ..FakeSink::default()
    });
    let notifier = Arc::new(FakeNotifier::default());
    let pipeline = pipeline(store, sink, Some(notifier.clone()));

    let err = pipeline
        .submit(&sample_sheet(), &ExhibitSelection::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Persist(_)));
    assert_eq!(notifier.notified.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn notify_failure_never_fails_the_submission() {
    let store = Arc::new(FakeStore::default());
    let sink = Arc::new(FakeSink::default());
    let notifier = Arc::new(FakeNotifier {
        fail: true,
        ..FakeNotifier::default()
    });
    let pipeline = pipeline(store, sink.clone(), Some(notifier.clone()));

    let receipt = pipeline
        .submit(&sample_sheet(), &ExhibitSelection::new(), None)
        .await
        .unwrap();

    assert_eq!(notifier.notified.load(Ordering::SeqCst), 1);
    assert_eq!(sink.inserted.lock().unwrap().len(), 1);
    assert_eq!(receipt.exhibit_count, 0);
}

#[tokio::test]
async fn degenerate_urls_are_repaired_before_persistence() {
    let store = Arc::new(FakeStore {
        degenerate_urls: true,
        ..FakeStore::default()
    });
    let sink = Arc::new(FakeSink::default());
    let pipeline = pipeline(store, sink.clone(), None);

    pipeline
        .submit(&sample_sheet(), &selection(&["a.pdf"]), None)
        .await
        .unwrap();

    let inserted = sink.inserted.lock().unwrap();
    assert!(inserted[0].exhibit_file_urls[0].starts_with("https://"));
}

#[tokio::test]
async fn opt_in_upload_retry_recovers_from_one_failure() {
    // Fails on the first call, succeeds from the second on.
    let store = Arc::new(FakeStore {
        fail_from_call: Some(1),
        succeed_after: Some(1),
        ..FakeStore::default()
    });
    let sink = Arc::new(FakeSink::default());
    let pipeline = Pipeline::new(store.clone(), sink.clone(), None, 2, 1);

    pipeline
        .submit(&sample_sheet(), &selection(&["a.pdf"]), None)
        .await
        .unwrap();

    assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    assert_eq!(sink.inserted.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn no_notifier_configured_skips_the_step() {
    let store = Arc::new(FakeStore::default());
    let sink = Arc::new(FakeSink::default());
    let pipeline = pipeline(store, sink.clone(), None);

    pipeline
        .submit(&sample_sheet(), &ExhibitSelection::new(), None)
        .await
        .unwrap();

    assert_eq!(sink.inserted.lock().unwrap().len(), 1);
}
