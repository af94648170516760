//! Object key conventions for uploaded exhibits.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of exhibit objects in the intake bucket.

use std::path::Path;

pub const EXHIBITS_PREFIX: &str = "exhibits/";

/// Key for one uploaded exhibit: millisecond timestamp prefix plus the
/// sanitized original filename. The prefix keeps repeat uploads of the same
/// filename from colliding under the bucket's do-not-overwrite policy.
pub fn exhibit(uploaded_at_ms: i64, original_name: &str) -> String {
    format!("{EXHIBITS_PREFIX}{uploaded_at_ms}_{}", sanitize_filename(original_name))
}

/// Strip path components and unsafe characters from a user-supplied
/// filename, truncating to 255 characters. Empty input becomes "exhibit".
pub fn sanitize_filename(original: &str) -> String {
    let name = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("exhibit");

    let clean: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | '\0'))
        .take(255)
        .collect();

    if clean.is_empty() {
        "exhibit".to_string()
    } else {
        clean
    }
}
