//! Request entry point module
//!
//! Maps an incoming HTTP request to a file-serving attempt. There is no
//! route table: every path resolves against the site root, and `/` is
//! substituted with the configured default document.

use crate::config::Config;
use crate::handler::static_files;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// The request method and body are ignored; only the URL path matters.
/// Generic over the body type so tests can drive it without a live socket.
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path();
    Ok(static_files::serve(&config.site, path).await)
}
