//! "Fill with sample data" helper. Served only outside production builds.

use crate::models::job_sheet::{Expenses, JobSheet, TestimonyTypes};

/// A fully valid sample draft for exercising the form during development.
pub fn sample_sheet() -> JobSheet {
    JobSheet {
        job_number: "JOB-2024-0117".to_string(),
        job_date: "2024-11-05".to_string(),
        scheduled_start_time: "09:00".to_string(),
        is_remote_proceeding: true,
        actual_start_time: "09:12".to_string(),
        end_time: "16:45".to_string(),
        report_wait_time: "15 minutes".to_string(),
        reporter: "Dana Whitfield".to_string(),
        reporter_email: "dana.whitfield@example.com".to_string(),
        reporter_cell: "512-555-0147".to_string(),
        videographer_quality: false,
        court_number: "261st District Court".to_string(),
        county_district: "Travis County".to_string(),
        trial_date: "2025-02-10".to_string(),
        cause_number: "D-1-GN-24-001234".to_string(),
        style: "Acme Logistics LLC v. Northline Freight Inc.".to_string(),
        witness_name: "Morgan Reyes".to_string(),
        witness_email: "morgan.reyes@example.com".to_string(),
        witness_type: "Expert".to_string(),
        is_no_show: false,
        is_cna: false,
        has_attorney: true,
        is_attorney_present: true,
        requires_read_and_sign: true,
        witness_attorney_email: "counsel@example.com".to_string(),
        is_rush: true,
        due_date: "2024-11-19".to_string(),
        total_pages: "214".to_string(),
        testimony_types: TestimonyTypes {
            regular: true,
            technical: true,
            ..TestimonyTypes::default()
        },
        transcription_listening_hours: String::new(),
        exhibits_marked: "1".to_string(),
        exhibits_through: "23".to_string(),
        total_exhibits: "23".to_string(),
        received_via: "Electronic".to_string(),
        attach_to_transcript: true,
        return_to: String::new(),
        expenses: Expenses {
            parking: "18.00".to_string(),
            mileage: "42.50".to_string(),
            ..Expenses::default()
        },
        special_instructions: "Please provide a condensed transcript with word index.".to_string(),
    }
}
