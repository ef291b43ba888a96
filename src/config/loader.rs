//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_SECTION: &str = "failure-report";

const CANDIDATES: [&str; 6] = [
    "failure-report.toml",
    ".failure-report.toml",
    "failure-report.yml",
    ".failure-report.yml",
    "failure-report.yaml",
    ".failure-report.yaml",
];

/// Load the config given by `config_path`, or discover one in `dir`.
///
/// An explicit config that fails to parse is an error. A discovered one
/// only logs a warning and falls back to defaults.
pub fn load_config(dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let explicit = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    match read_config(&config_file) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(config)
        }
        Err(e) if explicit => Err(e),
        Err(e) => {
            tracing::warn!(
                "Failed to load auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

fn read_config(config_file: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext =
        config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file),
        "yaml" | "yml" => parse_yaml_config(&content, config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    }
}

/// Parse TOML config, supporting a nested `[failure-report]` section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(CONFIG_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested `failure-report` section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(CONFIG_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| dir.join(candidate)).find(|path| path.exists())
}
