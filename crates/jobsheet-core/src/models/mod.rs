pub mod flat_record;
pub mod job_sheet;
pub mod receipt;
