//! Field-validation schema for the job sheet.
//!
//! Pure functions over the draft — no I/O. The field-path constants are the
//! camelCase wire names the form uses, so an error maps straight back to the
//! input that produced it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::job_sheet::{JobSheet, ReceivedVia, WitnessType};

/// Field paths as the form knows them.
pub mod field {
    pub const JOB_NUMBER: &str = "jobNumber";
    pub const JOB_DATE: &str = "jobDate";
    pub const SCHEDULED_START_TIME: &str = "scheduledStartTime";
    pub const ACTUAL_START_TIME: &str = "actualStartTime";
    pub const END_TIME: &str = "endTime";
    pub const REPORTER: &str = "reporter";
    pub const REPORTER_EMAIL: &str = "reporterEmail";
    pub const REPORTER_CELL: &str = "reporterCell";
    pub const COURT_NUMBER: &str = "courtNumber";
    pub const COUNTY_DISTRICT: &str = "countyDistrict";
    pub const TRIAL_DATE: &str = "trialDate";
    pub const CAUSE_NUMBER: &str = "causeNumber";
    pub const STYLE: &str = "style";
    pub const WITNESS_NAME: &str = "witnessName";
    pub const WITNESS_EMAIL: &str = "witnessEmail";
    pub const WITNESS_TYPE: &str = "witnessType";
    pub const WITNESS_ATTORNEY_EMAIL: &str = "witnessAttorneyEmail";
    pub const DUE_DATE: &str = "dueDate";
    pub const TOTAL_PAGES: &str = "totalPages";
    pub const RECEIVED_VIA: &str = "receivedVia";
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ErrorKind {
    MissingField,
    InvalidEmail,
    InvalidEnum,
}

/// One per-field validation failure, shown inline next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
}

/// The full result of validating a draft, in schema order.
///
/// Empty means the draft is valid and the submission pipeline may start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for a field, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn kind_for(&self, field: &str) -> Option<ErrorKind> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.kind)
    }

    fn push(&mut self, field: &str, kind: ErrorKind, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            kind,
            message: message.to_string(),
        });
    }

    fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.is_empty() {
            self.push(field, ErrorKind::MissingField, message);
        }
    }

    fn require_email(&mut self, field: &str, value: &str, missing: &str) {
        if value.is_empty() {
            self.push(field, ErrorKind::MissingField, missing);
        } else if !is_valid_email(value) {
            self.push(field, ErrorKind::InvalidEmail, "Invalid email address");
        }
    }
}

/// Validate a full draft. Runs synchronously against the current values;
/// values are checked as entered, without trimming.
pub fn validate(sheet: &JobSheet) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    // Job info
    errors.require(field::JOB_NUMBER, &sheet.job_number, "Job number is required");
    errors.require(field::JOB_DATE, &sheet.job_date, "Job date is required");
    errors.require(
        field::SCHEDULED_START_TIME,
        &sheet.scheduled_start_time,
        "Scheduled start time is required",
    );
    errors.require(
        field::ACTUAL_START_TIME,
        &sheet.actual_start_time,
        "Actual start time is required",
    );
    errors.require(field::END_TIME, &sheet.end_time, "End time is required");

    // Resource info
    errors.require(field::REPORTER, &sheet.reporter, "Reporter name is required");
    errors.require_email(
        field::REPORTER_EMAIL,
        &sheet.reporter_email,
        "Reporter email is required",
    );
    errors.require(field::REPORTER_CELL, &sheet.reporter_cell, "Cell number is required");

    // Case info
    errors.require(field::COURT_NUMBER, &sheet.court_number, "Court number is required");
    errors.require(
        field::COUNTY_DISTRICT,
        &sheet.county_district,
        "County/District is required",
    );
    errors.require(field::TRIAL_DATE, &sheet.trial_date, "Trial date is required");
    errors.require(field::CAUSE_NUMBER, &sheet.cause_number, "Cause number is required");
    errors.require(field::STYLE, &sheet.style, "Style is required");

    // Witness info
    errors.require(field::WITNESS_NAME, &sheet.witness_name, "Witness name is required");
    errors.require_email(
        field::WITNESS_EMAIL,
        &sheet.witness_email,
        "Witness email is required",
    );
    if sheet.witness_type.is_empty() {
        errors.push(
            field::WITNESS_TYPE,
            ErrorKind::MissingField,
            "Witness type is required",
        );
    } else if WitnessType::parse(&sheet.witness_type).is_none() {
        errors.push(
            field::WITNESS_TYPE,
            ErrorKind::InvalidEnum,
            "Witness type must be Party, Fact, or Expert",
        );
    }
    // Attorney email is optional: empty is valid, anything else must parse.
    if !sheet.witness_attorney_email.is_empty() && !is_valid_email(&sheet.witness_attorney_email) {
        errors.push(
            field::WITNESS_ATTORNEY_EMAIL,
            ErrorKind::InvalidEmail,
            "Invalid email address",
        );
    }

    // Transcript info. Total pages stays an opaque numeric string; the
    // persistence layer owns any numeric interpretation.
    errors.require(field::DUE_DATE, &sheet.due_date, "Due date is required");
    errors.require(field::TOTAL_PAGES, &sheet.total_pages, "Total pages is required");

    // Exhibits info
    if !sheet.received_via.is_empty() && ReceivedVia::parse(&sheet.received_via).is_none() {
        errors.push(
            field::RECEIVED_VIA,
            ErrorKind::InvalidEnum,
            "Received via must be Paper or Electronic",
        );
    }

    errors
}

/// Syntactic email check: one `@`, a non-empty local part, a domain
/// containing at least one interior dot, and no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}
