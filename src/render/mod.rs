//! Report rendering (Markdown comment bodies)

pub mod message;
pub mod symptoms;

pub use message::{build_message, MessageRenderer, ReportOutcome};
pub use symptoms::SymptomCatalog;
