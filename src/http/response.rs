//! HTTP response building module
//!
//! Provides builders for the response shapes the server emits, decoupled
//! from path resolution and file loading.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Fixed body for every unreadable file, regardless of the failure cause
pub const NOT_FOUND_BODY: &str = "<h1>404 - File Not Found</h1>";

/// Build 200 OK response carrying file contents
pub fn build_file_response(content: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/html")
        .header("Content-Length", NOT_FOUND_BODY.len())
        .body(Full::new(Bytes::from(NOT_FOUND_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(NOT_FOUND_BODY)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
