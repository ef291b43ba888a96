//! failure-report: render test-run failures as Markdown report comments

use anyhow::Result;

fn main() -> Result<()> {
    failure_report::cli::run()
}
