//! Request handler module
//!
//! Responsible for mapping requests to filesystem reads. Static file serving
//! is the only behavior; there is no routing layer.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
