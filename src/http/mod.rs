//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from file
//! serving logic.

pub mod mime;
pub mod response;

// Re-export commonly used items
pub use response::{build_404_response, build_file_response};
