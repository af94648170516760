use std::env;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use jobsheet_pipeline::config::SubmitConfig;
use jobsheet_pipeline::submit::Pipeline;
use state::AppState;

/// Room for 50 PDF exhibits plus the sheet part.
const MAX_BODY_BYTES: usize = 256 * 1024 * 1024;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bucket = env::var("JOBSHEET_BUCKET").unwrap_or_else(|_| "jobsheet-exhibits".to_string());
    let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
    let records_url = env::var("JOBSHEET_RECORDS_URL")
        .map_err(|_| eyre::eyre!("JOBSHEET_RECORDS_URL must be set"))?;
    let records_api_key = env::var("JOBSHEET_RECORDS_API_KEY")
        .map_err(|_| eyre::eyre!("JOBSHEET_RECORDS_API_KEY must be set"))?;

    let mut config = SubmitConfig::new(bucket, region, records_url, records_api_key);
    config.webhook_url = env::var("JOBSHEET_WEBHOOK_URL").ok();
    if let Some(secs) = env_parse::<u64>("JOBSHEET_HTTP_TIMEOUT_SECS") {
        config.http_timeout = Duration::from_secs(secs);
    }
    if let Some(n) = env_parse::<u32>("JOBSHEET_UPLOAD_ATTEMPTS") {
        config.upload_attempts = n;
    }
    if let Some(n) = env_parse::<u32>("JOBSHEET_PERSIST_ATTEMPTS") {
        config.persist_attempts = n;
    }
    let bind_addr = env::var("JOBSHEET_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let static_dir = env::var("JOBSHEET_STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    let s3 = jobsheet_storage::client::build_client().await;
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;
    let pipeline = Pipeline::from_config(&config, s3, http);

    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/ip", get(routes::ip::caller_ip))
        .route("/api/submit", post(routes::submit::submit_sheet));

    // "Fill with sample data" exists only outside production builds.
    #[cfg(debug_assertions)]
    let api = api.route("/api/sample", get(routes::sample::sample_sheet));

    let app = api
        .fallback_service(ServeDir::new(&static_dir))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "job sheet intake listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
