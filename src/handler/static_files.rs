//! Static file serving module
//!
//! Handles path resolution, file loading, MIME type detection, and response
//! building.

use crate::config::SiteConfig;
use crate::http::{self, mime};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve the file a URL path resolves to, or the fixed 404 page.
///
/// Every read failure (missing file, permission denied, is-a-directory)
/// collapses to the same 404 response.
pub async fn serve(site: &SiteConfig, url_path: &str) -> Response<Full<Bytes>> {
    let target = target_path(site, url_path);
    let file_path = resolve_path(&site.root, target);

    match fs::read(&file_path).await {
        Ok(content) => {
            let content_type = mime::content_type_for(mime::extension_of(target));
            http::build_file_response(content, content_type)
        }
        Err(_) => http::build_404_response(),
    }
}

/// Apply default-document substitution for the root path
fn target_path<'a>(site: &'a SiteConfig, url_path: &'a str) -> &'a str {
    if url_path == "/" {
        &site.default_document
    } else {
        url_path
    }
}

/// Join a request path onto the site root.
///
/// The leading slash is stripped so the join stays relative to the root.
/// No normalization is applied beyond that; `..` segments pass through
/// unchanged, matching the original server this replaces.
pub fn resolve_path(root: &str, target: &str) -> PathBuf {
    Path::new(root).join(target.trim_start_matches('/'))
}
