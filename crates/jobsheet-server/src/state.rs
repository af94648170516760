use std::sync::Arc;

use jobsheet_pipeline::submit::Pipeline;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}
