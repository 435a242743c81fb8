//! fluent-indent - Re-indents fluent builder chains in place

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use fluent_indent::process::format_path;
use fluent_indent::{parse_args, Config, Result};
use tracing::Level;

fn main() -> ExitCode {
    init_logging();

    let args = match parse_args() {
        Ok(args) => args,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::from(1);
        }
    };

    match run(&args.file) {
        Ok(()) => {
            println!("Fixed indentation in {}", args.file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

/// Load the configuration for `path` and rewrite it in place
fn run(path: &Path) -> Result<()> {
    let config = Config::from_discovered_files(path)
        .with_context(|| format!("loading configuration for {}", path.display()))?;
    let outcome = format_path(path, &config)?;
    tracing::debug!(file = %path.display(), ?outcome, "done");
    Ok(())
}

/// Warnings and errors go to stderr; stdout carries only the confirmation line
fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
