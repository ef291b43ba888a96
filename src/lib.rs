//! failure-report: render test-run failures as Markdown report comments
//!
//! The core is a three-stage text pipeline: long stack-trace paths are
//! shortened, failure text is escaped for a table cell, and a result payload
//! is assembled into the final comment body.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod payload;
pub mod render;
pub mod text;

pub use domain::{Config, FailureEntry, FlakeAnnotation, FlakeSymptom, ResultPayload};
pub use error::ReportError;
pub use render::{build_message, MessageRenderer, ReportOutcome};
pub use text::{escape_failure_message, shorten_file_paths};
