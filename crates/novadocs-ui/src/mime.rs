//! Content-Type lookup for packaged assets, keyed by file extension.

/// MIME type for an asset path, from the fixed extension table.
/// Anything outside the table is served as a generic binary.
pub fn content_type_for(path: &str) -> &'static str {
    match extension(path).as_deref() {
        Some("css") => "text/css",
        Some("js" | "mjs") => "application/javascript",
        Some("html") => "text/html",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("eot") => "application/vnd.ms-fontobject",
        _ => "application/octet-stream",
    }
}

/// Lowercased text after the last dot. A dot in first or last position does
/// not count as an extension separator.
fn extension(path: &str) -> Option<String> {
    let idx = path.rfind('.')?;
    if idx == 0 || idx + 1 == path.len() {
        return None;
    }
    Some(path[idx + 1..].to_ascii_lowercase())
}
