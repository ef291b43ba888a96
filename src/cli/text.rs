//! Escape and shorten command implementations

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{read_input, write_output};
use crate::text::{escape_failure_message, prepare_failure_message, shorten_file_paths};

#[derive(Args)]
pub struct EscapeArgs {
    /// Input file (reads stdin when omitted or '-')
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Shorten embedded file paths before escaping
    #[arg(long)]
    pub shorten: bool,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShortenArgs {
    /// Input file (reads stdin when omitted or '-')
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run_escape(args: EscapeArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let escaped = if args.shorten {
        prepare_failure_message(&text)
    } else {
        escape_failure_message(&text)
    };
    write_output(args.output.as_deref(), &escaped)
}

pub fn run_shorten(args: ShortenArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    write_output(args.output.as_deref(), &shorten_file_paths(&text))
}
