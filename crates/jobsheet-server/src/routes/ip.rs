use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct IpResponse {
    pub ip: Option<String>,
}

/// `GET /api/ip` — echo the caller's address as the proxy saw it.
pub async fn caller_ip(headers: HeaderMap) -> Json<IpResponse> {
    Json(IpResponse {
        ip: ip_from_headers(&headers),
    })
}

/// Caller address from proxy headers: first `x-forwarded-for` value wins,
/// `x-real-ip` is the fallback, absent headers yield `None`.
pub fn ip_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        let first = forwarded.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }
    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
