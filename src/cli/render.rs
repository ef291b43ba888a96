//! Render command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{parse_label, write_output};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::payload::{load_payload, PayloadFormat};
use crate::render::MessageRenderer;

#[derive(Args)]
pub struct RenderArgs {
    /// Result payload file ('-' reads stdin)
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Payload format (json or yaml); guessed from the extension by default
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to config file (failure-report.toml or .failure-report.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep stack-trace paths at full length
    #[arg(long)]
    pub no_shorten_paths: bool,

    /// Override a flake symptom description (repeatable)
    #[arg(long = "label", value_name = "SYMPTOM=TEXT")]
    pub labels: Vec<String>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let format = args
        .format
        .as_deref()
        .map(str::parse::<PayloadFormat>)
        .transpose()
        .context("Invalid --format")?;

    let symptom_labels =
        args.labels.iter().map(|raw| parse_label(raw)).collect::<Result<Vec<_>>>()?;

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let file_config = load_config(&cwd, args.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides { no_shorten_paths: args.no_shorten_paths, symptom_labels },
    );

    let payload = load_payload(&args.payload, format)
        .with_context(|| format!("Failed to load payload {}", args.payload.display()))?;

    let message = MessageRenderer::from_config(&config).render(&payload);
    write_output(args.output.as_deref(), &message)
}
