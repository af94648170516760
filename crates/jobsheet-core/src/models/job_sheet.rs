use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One Court Reporter Job Sheet draft, exactly as the form edits it.
///
/// Wire names are the camelCase identifiers the page has always used, so
/// the exported TypeScript bindings match the existing form state. Every
/// field is serde-defaulted: an absent field deserializes as empty/false
/// and is reported by validation, never by a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct JobSheet {
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
    /// Held as the raw select value; membership in [`WitnessType`] is a
    /// validation rule, not a parse rule.
    pub witness_type: String,
    pub is_no_show: bool,
    #[serde(rename = "isCNA")]
    #[ts(rename = "isCNA")]
    pub is_cna: bool,
    pub has_attorney: bool,
    pub is_attorney_present: bool,
    pub requires_read_and_sign: bool,
    pub witness_attorney_email: String,

    // Original transcript info
    pub is_rush: bool,
    pub due_date: String,
    pub total_pages: String,
    pub testimony_types: TestimonyTypes,
    pub transcription_listening_hours: String,

    // Original exhibits info
    pub exhibits_marked: String,
    pub exhibits_through: String,
    pub total_exhibits: String,
    pub received_via: String,
    pub attach_to_transcript: bool,
    pub return_to: String,

    // Expense reimbursement
    pub expenses: Expenses,

    // Other instructions
    pub special_instructions: String,
}

/// Testimony-type checkbox group. Always structurally complete — all seven
/// members are present even when every one is false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct TestimonyTypes {
    pub regular: bool,
    pub technical: bool,
    pub video: bool,
    pub interpreter: bool,
    pub realtime: bool,
    pub rough_draft: bool,
    pub recording_transcription: bool,
}

/// Expense reimbursement group. Amounts stay opaque strings until the
/// persistence layer; the group itself is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Expenses {
    pub parking: String,
    pub travel: String,
    pub mileage: String,
    pub shipping: String,
    pub other: String,
}

/// Allowed values for the witness-type select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WitnessType {
    Party,
    Fact,
    Expert,
}

impl WitnessType {
    pub const VARIANTS: [&'static str; 3] = ["Party", "Fact", "Expert"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Party" => Some(Self::Party),
            "Fact" => Some(Self::Fact),
            "Expert" => Some(Self::Expert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Party => "Party",
            Self::Fact => "Fact",
            Self::Expert => "Expert",
        }
    }
}

/// Allowed values for the received-via select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ReceivedVia {
    Paper,
    Electronic,
}

impl ReceivedVia {
    pub const VARIANTS: [&'static str; 2] = ["Paper", "Electronic"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Paper" => Some(Self::Paper),
            "Electronic" => Some(Self::Electronic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paper => "Paper",
            Self::Electronic => "Electronic",
        }
    }
}
