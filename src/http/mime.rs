//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

/// Get MIME Content-Type based on file extension (including leading dot)
///
/// Unknown and missing extensions fall back to `text/html`, which also
/// covers the default document and extensionless paths.
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        ".js" => "text/javascript",
        ".css" => "text/css",
        ".json" => "application/json",
        _ => "text/html",
    }
}

/// Extract the extension of a path's final segment, including the dot.
///
/// Returns the empty string when the segment has no dot or only a leading
/// dot (`.gitignore` has no extension). Dots in directory names are ignored.
pub fn extension_of(path: &str) -> &str {
    let segment = path.rsplit('/').next().unwrap_or(path);
    match segment.rfind('.') {
        Some(idx) if idx > 0 => &segment[idx..],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries() {
        assert_eq!(content_type_for(".js"), "text/javascript");
        assert_eq!(content_type_for(".css"), "text/css");
        assert_eq!(content_type_for(".json"), "application/json");
    }

    #[test]
    fn test_default_content_type() {
        assert_eq!(content_type_for(".html"), "text/html");
        assert_eq!(content_type_for(".png"), "text/html");
        assert_eq!(content_type_for(""), "text/html");
    }

    #[test]
    fn test_extension_extraction() {
        assert_eq!(extension_of("index1.html"), ".html");
        assert_eq!(extension_of("/foo.js"), ".js");
        assert_eq!(extension_of("/a/b/style.css"), ".css");
        assert_eq!(extension_of("/archive.tar.gz"), ".gz");
    }

    #[test]
    fn test_extension_edge_cases() {
        // No extension at all
        assert_eq!(extension_of("/readme"), "");
        // Dot in a directory name does not count
        assert_eq!(extension_of("/v1.2/readme"), "");
        // Leading-dot files have no extension
        assert_eq!(extension_of("/.gitignore"), "");
        // Trailing dot is kept, and still maps to text/html
        assert_eq!(extension_of("/odd."), ".");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn test_extraction_feeds_table() {
        assert_eq!(content_type_for(extension_of("/app.js")), "text/javascript");
        assert_eq!(content_type_for(extension_of("/missing.txt")), "text/html");
        assert_eq!(content_type_for(extension_of("/readme")), "text/html");
    }
}
