//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Read text from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed reading input file: {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed reading stdin")?;
            Ok(buf)
        }
    }
}

/// Write `content` byte-for-byte (no trailing newline) to `path` or stdout.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed writing output file: {}", path.display()))?;
            tracing::info!("Report written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Parse a `SYMPTOM=TEXT` label override.
pub fn parse_label(raw: &str) -> Result<(String, String)> {
    let (tag, label) = raw
        .split_once('=')
        .with_context(|| format!("Invalid label '{}': expected SYMPTOM=TEXT", raw))?;
    let tag = tag.trim();
    if tag.is_empty() {
        anyhow::bail!("Invalid label '{}': missing symptom tag", raw);
    }
    Ok((tag.to_string(), label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_label_splits_on_first_equals() {
        let (tag, label) = parse_label("FAILED_IN_DEFAULT_BRANCH=a=b").expect("label");
        assert_eq!(tag, "FAILED_IN_DEFAULT_BRANCH");
        assert_eq!(label, "a=b");
    }

    #[test]
    fn parse_label_rejects_missing_parts() {
        assert!(parse_label("no-equals").is_err());
        assert!(parse_label(" =text").is_err());
    }

    #[test]
    fn write_output_creates_parent_dirs_and_keeps_bytes() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("out/nested/report.md");
        write_output(Some(&path), "line\n<br>").expect("write");
        assert_eq!(fs::read_to_string(path).expect("read"), "line\n<br>");
    }

    #[test]
    fn read_input_reads_files() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("trace.txt");
        fs::write(&path, "a\r\nb").expect("write");
        assert_eq!(read_input(Some(&path)).expect("read"), "a\r\nb");
    }
}
