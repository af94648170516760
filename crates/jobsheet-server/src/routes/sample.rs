use axum::Json;

use jobsheet_core::models::job_sheet::JobSheet;

/// `GET /api/sample` — a filled draft for the "fill with sample data"
/// affordance. Compiled only into non-production builds.
pub async fn sample_sheet() -> Json<JobSheet> {
    Json(jobsheet_core::sample::sample_sheet())
}
