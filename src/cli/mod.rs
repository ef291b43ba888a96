//! Command-line interface for failure-report
//!
//! Provides `render`, `escape` and `shorten` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod render;
mod text;
mod utils;

/// Render test-run failures as Markdown report comments
#[derive(Parser)]
#[command(name = "failure-report")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a result payload (JSON or YAML) as a failure report
    Render(render::RenderArgs),

    /// Escape failure text for embedding in a report table cell
    Escape(text::EscapeArgs),

    /// Shorten long file paths embedded in failure text
    Shorten(text::ShortenArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Render(args) => render::run(args),
        Commands::Escape(args) => text::run_escape(args),
        Commands::Shorten(args) => text::run_shorten(args),
    }
}
