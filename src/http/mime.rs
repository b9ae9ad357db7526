//! Content type selection by file extension.

pub const TEXT_HTML: &str = "text/html;charset=utf-8";
pub const TEXT_CSS: &str = "text/css;charset=utf-8";
pub const TEXT_JAVASCRIPT: &str = "text/javascript;charset=utf-8";

pub fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("htm") | Some("html") => TEXT_HTML,
        Some("css") => TEXT_CSS,
        Some("js") => TEXT_JAVASCRIPT,
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("json") => "application/json",
        Some("txt") => "text/plain;charset=utf-8",
        _ => "application/octet-stream",
    }
}
