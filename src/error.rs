//! Library error type

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Unsupported payload format '{0}' (expected json or yaml)")]
    UnsupportedFormat(String),

    #[error("Failed reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
