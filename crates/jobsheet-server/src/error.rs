use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use jobsheet_core::schema::ValidationErrors;
use jobsheet_pipeline::error::SubmitError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Field validation failed; the body carries the per-field errors for
    /// inline display.
    Validation(ValidationErrors),
    /// An upstream collaborator (object storage or the records table)
    /// failed. The client keeps its draft and may resubmit.
    Upstream(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ValidationBody {
    error: String,
    fields: ValidationErrors,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg })).into_response()
            }
            ApiError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    error: "validation failed".to_string(),
                    fields,
                }),
            )
                .into_response(),
            ApiError::Upstream(msg) => {
                (StatusCode::BAD_GATEWAY, Json(ErrorBody { error: msg })).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<SubmitError> for ApiError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::Validation(errors) => ApiError::Validation(errors),
            SubmitError::Upload { .. } | SubmitError::Persist(_) => {
                ApiError::Upstream(e.to_string())
            }
            // Notify failures are swallowed inside the pipeline; reaching
            // here would be a pipeline bug.
            SubmitError::Notify(_) => ApiError::Internal(e.to_string()),
        }
    }
}
