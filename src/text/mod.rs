//! Failure-text transforms
//!
//! Shorten paths first, escape second: escaping must run on the final text
//! so the `...` markers and `<br>` breaks are never mangled.

pub mod escape;
pub mod paths;

pub use escape::escape_failure_message;
pub use paths::shorten_file_paths;

/// Shorten embedded paths, then escape the result for a table cell.
pub fn prepare_failure_message(message: &str) -> String {
    escape_failure_message(&shorten_file_paths(message))
}
