use jiff::Timestamp;
use jobsheet_core::models::flat_record::FlatRecord;
use jobsheet_core::models::job_sheet::JobSheet;
use jobsheet_core::sample::sample_sheet;

#[test]
fn minimal_submission_flattens_to_underscore_keys() {
    let mut sheet = JobSheet::default();
    sheet.job_number = "JOB-1".to_string();

    let record = FlatRecord::from_sheet(&sheet, vec![], vec![], None, Timestamp::UNIX_EPOCH);
    let value = serde_json::to_value(&record).unwrap();
    let obj = value.as_object().unwrap();

    assert_eq!(obj["job_number"], "JOB-1");
    assert!(obj.contains_key("county_district"));
    assert!(obj.contains_key("is_cna"));
    assert!(obj.contains_key("requires_read_and_sign"));

    // Groups are spread into prefixed columns, never nested.
    for key in [
        "testimony_regular",
        "testimony_technical",
        "testimony_video",
        "testimony_interpreter",
        "testimony_realtime",
        "testimony_rough_draft",
        "testimony_recording_transcription",
        "expense_parking",
        "expense_travel",
        "expense_mileage",
        "expense_shipping",
        "expense_other",
    ] {
        assert!(obj.contains_key(key), "{key}");
    }
    assert!(!obj.contains_key("testimonyTypes"));
    assert!(!obj.contains_key("expenses"));

    // No camelCase key leaks through.
    assert!(obj.keys().all(|k| !k.chars().any(|c| c.is_ascii_uppercase())));
}

#[test]
fn groups_are_structurally_complete_when_empty() {
    let record =
        FlatRecord::from_sheet(&JobSheet::default(), vec![], vec![], None, Timestamp::UNIX_EPOCH);
    assert!(!record.testimony_regular);
    assert!(!record.testimony_recording_transcription);
    assert_eq!(record.expense_other, "");
}

#[test]
fn derived_fields_are_attached() {
    let at: Timestamp = "2024-11-05T17:00:00Z".parse().unwrap();
    let record = FlatRecord::from_sheet(
        &sample_sheet(),
        vec!["Exhibit A.pdf".to_string()],
        vec!["https://bucket.example/exhibits/1_Exhibit A.pdf".to_string()],
        Some("203.0.113.7".to_string()),
        at,
    );

    assert_eq!(record.exhibit_file_names.len(), 1);
    assert_eq!(record.exhibit_file_urls.len(), 1);
    assert_eq!(record.submitted_ip.as_deref(), Some("203.0.113.7"));
    assert_eq!(record.submitted_at, at);
    assert!(record.testimony_technical);
    assert_eq!(record.expense_parking, "18.00");
    assert_eq!(record.witness_type, "Expert");
}
