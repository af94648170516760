use serde::{Deserialize, Serialize};

use crate::models::job_sheet::JobSheet;

/// The flat, underscore-keyed row inserted into the records table.
///
/// One column per scalar draft field; the testimony and expense groups are
/// spread into individually prefixed columns so the row never nests. Built
/// once per submission, after exhibit upload and just before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    // Job info
    pub job_number: String,
    pub job_date: String,
    pub scheduled_start_time: String,
    pub is_remote_proceeding: bool,
    pub actual_start_time: String,
    pub end_time: String,
    pub report_wait_time: String,

    // Resource info
    pub reporter: String,
    pub reporter_email: String,
    pub reporter_cell: String,
    pub videographer_quality: bool,

    // Case info
    pub court_number: String,
    pub county_district: String,
    pub trial_date: String,
    pub cause_number: String,
    pub style: String,

    // Witness info
    pub witness_name: String,
    pub witness_email: String,
    pub witness_type: String,
    pub is_no_show: bool,
    pub is_cna: bool,
    pub has_attorney: bool,
    pub is_attorney_present: bool,
    pub requires_read_and_sign: bool,
    pub witness_attorney_email: String,

    // Transcript info, testimony group spread
    pub is_rush: bool,
    pub due_date: String,
    pub total_pages: String,
    pub testimony_regular: bool,
    pub testimony_technical: bool,
    pub testimony_video: bool,
    pub testimony_interpreter: bool,
    pub testimony_realtime: bool,
    pub testimony_rough_draft: bool,
    pub testimony_recording_transcription: bool,
    pub transcription_listening_hours: String,

    // Exhibits info
    pub exhibits_marked: String,
    pub exhibits_through: String,
    pub total_exhibits: String,
    pub received_via: String,
    pub attach_to_transcript: bool,
    pub return_to: String,

    // Expense group spread
    pub expense_parking: String,
    pub expense_travel: String,
    pub expense_mileage: String,
    pub expense_shipping: String,
    pub expense_other: String,

    pub special_instructions: String,

    // Derived at submit time
    pub exhibit_file_names: Vec<String>,
    pub exhibit_file_urls: Vec<String>,
    pub submitted_ip: Option<String>,
    pub submitted_at: jiff::Timestamp,
}

impl FlatRecord {
    /// Flatten a validated draft, attaching the uploaded-exhibit lists and
    /// the best-effort caller IP.
    pub fn from_sheet(
        sheet: &JobSheet,
        exhibit_file_names: Vec<String>,
        exhibit_file_urls: Vec<String>,
        submitted_ip: Option<String>,
        submitted_at: jiff::Timestamp,
    ) -> Self {
        Self {
            job_number: sheet.job_number.clone(),
            job_date: sheet.job_date.clone(),
            scheduled_start_time: sheet.scheduled_start_time.clone(),
            is_remote_proceeding: sheet.is_remote_proceeding,
            actual_start_time: sheet.actual_start_time.clone(),
            end_time: sheet.end_time.clone(),
            report_wait_time: sheet.report_wait_time.clone(),
            reporter: sheet.reporter.clone(),
            reporter_email: sheet.reporter_email.clone(),
            reporter_cell: sheet.reporter_cell.clone(),
            videographer_quality: sheet.videographer_quality,
            court_number: sheet.court_number.clone(),
            county_district: sheet.county_district.clone(),
            trial_date: sheet.trial_date.clone(),
            cause_number: sheet.cause_number.clone(),
            style: sheet.style.clone(),
            witness_name: sheet.witness_name.clone(),
            witness_email: sheet.witness_email.clone(),
            witness_type: sheet.witness_type.clone(),
            is_no_show: sheet.is_no_show,
            is_cna: sheet.is_cna,
            has_attorney: sheet.has_attorney,
            is_attorney_present: sheet.is_attorney_present,
            requires_read_and_sign: sheet.requires_read_and_sign,
            witness_attorney_email: sheet.witness_attorney_email.clone(),
            is_rush: sheet.is_rush,
            due_date: sheet.due_date.clone(),
            total_pages: sheet.total_pages.clone(),
            testimony_regular: sheet.testimony_types.regular,
            testimony_technical: sheet.testimony_types.technical,
            testimony_video: sheet.testimony_types.video,
            testimony_interpreter: sheet.testimony_types.interpreter,
            testimony_realtime: sheet.testimony_types.realtime,
            testimony_rough_draft: sheet.testimony_types.rough_draft,
            testimony_recording_transcription: sheet.testimony_types.recording_transcription,
            transcription_listening_hours: sheet.transcription_listening_hours.clone(),
            exhibits_marked: sheet.exhibits_marked.clone(),
            exhibits_through: sheet.exhibits_through.clone(),
            total_exhibits: sheet.total_exhibits.clone(),
            received_via: sheet.received_via.clone(),
            attach_to_transcript: sheet.attach_to_transcript,
            return_to: sheet.return_to.clone(),
            expense_parking: sheet.expenses.parking.clone(),
            expense_travel: sheet.expenses.travel.clone(),
            expense_mileage: sheet.expenses.mileage.clone(),
            expense_shipping: sheet.expenses.shipping.clone(),
            expense_other: sheet.expenses.other.clone(),
            special_instructions: sheet.special_instructions.clone(),
            exhibit_file_names,
            exhibit_file_urls,
            submitted_ip,
            submitted_at,
        }
    }
}
