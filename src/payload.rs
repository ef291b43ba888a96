//! Result payload loading and validation
//!
//! Payloads are rejected before any rendering starts, so a bad input never
//! produces a partial document.

use crate::domain::ResultPayload;
use crate::error::{ReportError, Result};
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadFormat {
    #[default]
    Json,
    Yaml,
}

impl PayloadFormat {
    /// Guess the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yaml") | Some("yml") => PayloadFormat::Yaml,
            _ => PayloadFormat::Json,
        }
    }
}

impl FromStr for PayloadFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(PayloadFormat::Json),
            "yaml" | "yml" => Ok(PayloadFormat::Yaml),
            other => Err(ReportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadFormat::Json => f.write_str("json"),
            PayloadFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Parse and validate a payload from text.
pub fn parse_payload(content: &str, format: PayloadFormat) -> Result<ResultPayload> {
    let payload: ResultPayload = match format {
        PayloadFormat::Json => serde_json::from_str(content)
            .map_err(|e| ReportError::InvalidPayload(format!("JSON: {e}")))?,
        PayloadFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| ReportError::InvalidPayload(format!("YAML: {e}")))?,
    };
    validate_payload(&payload)?;

    tracing::debug!(
        failures = payload.failures.len(),
        flaky = payload.flake_annotations.len(),
        "Loaded {} payload",
        format
    );
    Ok(payload)
}

/// Load a payload from a file, or from stdin when `path` is `-`.
pub fn load_payload(path: &Path, format: Option<PayloadFormat>) -> Result<ResultPayload> {
    let is_stdin = path.as_os_str() == "-";
    let content = if is_stdin {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| ReportError::Io { path: path.to_path_buf(), source })?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|source| ReportError::Io { path: path.to_path_buf(), source })?
    };

    let format = match format {
        Some(format) => format,
        None if is_stdin => PayloadFormat::Json,
        None => PayloadFormat::from_path(path),
    };
    parse_payload(&content, format)
}

/// Check invariants that deserialization alone cannot express.
pub fn validate_payload(payload: &ResultPayload) -> Result<()> {
    if payload.total_count().is_none() {
        return Err(ReportError::InvalidPayload(format!(
            "test counts overflow: {} failed, {} passed, {} skipped",
            payload.failed_count, payload.passed_count, payload.skipped_count
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_json_payload() {
        let payload = parse_payload(
            r#"{"failed": 2, "passed": 0, "skipped": 1, "failures": []}"#,
            PayloadFormat::Json,
        )
        .expect("payload");
        assert_eq!(payload.failed_count, 2);
        assert_eq!(payload.skipped_count, 1);
    }

    #[test]
    fn parses_yaml_payload() {
        let yaml = "failed: 1\npassed: 2\nskipped: 3\nfailures:\n  - failure_message: boom\n    testsuite: suite\n    name: case\n    flags: [unit]\n    test_id: t1\nflaky_tests:\n  t1:\n    flake_symptoms: [CONSECUTIVE_DIFF_OUTCOMES]\n    is_new_flake: true\n";
        let payload = parse_payload(yaml, PayloadFormat::Yaml).expect("payload");
        assert_eq!(payload.failures.len(), 1);
        assert_eq!(payload.failures[0].flags.as_deref(), Some(&["unit".to_string()][..]));
        assert!(payload.flake_annotations["t1"].is_new_flake);
    }

    #[test]
    fn negative_counts_are_invalid() {
        let err = parse_payload(r#"{"failed": -1}"#, PayloadFormat::Json).unwrap_err();
        assert!(matches!(err, ReportError::InvalidPayload(_)));
    }

    #[test]
    fn unknown_symptom_is_invalid() {
        let err = parse_payload(
            r#"{"failed": 1, "flaky_tests": {"t": {"flake_symptoms": ["MOON_PHASE"]}}}"#,
            PayloadFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::InvalidPayload(_)));
    }

    #[test]
    fn overflowing_counts_are_invalid() {
        let json = format!(r#"{{"failed": {}, "passed": 1}}"#, u64::MAX);
        let err = parse_payload(&json, PayloadFormat::Json).unwrap_err();
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn format_is_detected_from_extension() {
        assert_eq!(PayloadFormat::from_path(Path::new("p.yml")), PayloadFormat::Yaml);
        assert_eq!(PayloadFormat::from_path(Path::new("p.YAML")), PayloadFormat::Yaml);
        assert_eq!(PayloadFormat::from_path(Path::new("p.json")), PayloadFormat::Json);
        assert_eq!(PayloadFormat::from_path(Path::new("payload")), PayloadFormat::Json);
    }

    #[test]
    fn format_parses_from_cli_value() {
        assert_eq!("YAML".parse::<PayloadFormat>().expect("yaml"), PayloadFormat::Yaml);
        assert!(matches!(
            "xml".parse::<PayloadFormat>(),
            Err(ReportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn load_payload_reads_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("payload.yaml");
        fs::write(&path, "failed: 0\npassed: 4\n").expect("write");

        let payload = load_payload(&path, None).expect("payload");
        assert_eq!(payload.passed_count, 4);
    }

    #[test]
    fn load_payload_reports_missing_file() {
        let tmp = TempDir::new().expect("tmp");
        let err = load_payload(&tmp.path().join("missing.json"), None).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
