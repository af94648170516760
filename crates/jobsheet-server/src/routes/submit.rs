use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::Json;

use jobsheet_core::exhibits::{CandidateFile, ExhibitSelection};
use jobsheet_core::models::job_sheet::JobSheet;
use jobsheet_core::models::receipt::SubmitReceipt;

use crate::error::ApiError;
use crate::routes::ip::ip_from_headers;
use crate::state::AppState;

/// `POST /api/submit` — one multipart request per submission: a `sheet`
/// part carrying the draft JSON plus any number of `exhibit` file parts.
///
/// Exhibit parts funnel through [`ExhibitSelection::add`], so the PDF-only
/// filter and the 50-file cap hold server-side no matter what the page
/// sends. The caller IP rides in on the proxy headers of this same request.
pub async fn submit_sheet(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<SubmitReceipt>, ApiError> {
    let mut sheet: Option<JobSheet> = None;
    let mut selection = ExhibitSelection::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        let part_name = field.name().map(str::to_string);
        match part_name.as_deref() {
            Some("sheet") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("unreadable sheet part: {e}")))?;
                sheet = Some(
                    serde_json::from_str(&text)
                        .map_err(|e| ApiError::BadRequest(format!("malformed sheet JSON: {e}")))?,
                );
            }
            Some("exhibit") => {
                let name = field.file_name().unwrap_or("exhibit.pdf").to_string();
                let media_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("unreadable exhibit part: {e}")))?
                    .to_vec();
                selection.add([CandidateFile {
                    name,
                    media_type,
                    bytes,
                }]);
            }
            // Unknown parts are ignored.
            _ => {}
        }
    }

    let sheet = sheet.ok_or_else(|| ApiError::BadRequest("missing 'sheet' part".to_string()))?;
    let caller_ip = ip_from_headers(&headers);
    let receipt = state.pipeline.submit(&sheet, &selection, caller_ip).await?;
    Ok(Json(receipt))
}
