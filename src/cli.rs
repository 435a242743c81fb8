//! Command-line interface for fluent-indent.
//!
//! Defines CLI arguments using clap builder API. The tool takes exactly one
//! positional file path and no options.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, Command};

use crate::error::FluentIndentError;

/// Binary name used in the usage message
pub const PROGRAM: &str = "fluent-indent";

/// CLI arguments parsed from command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// File to re-indent in place
    pub file: PathBuf,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new(PROGRAM)
        .about("Re-indent fluent builder chains so indentation follows nesting depth")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("file")
                .help("Source file to rewrite in place")
                .value_name("FILE")
                .required(true)
                .num_args(1)
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Parse CLI arguments from the process command line
pub fn parse_args() -> Result<CliArgs, FluentIndentError> {
    parse_args_from(std::env::args_os())
}

/// Parse CLI arguments from an iterator (first item is the program name)
///
/// Any clap failure, whatever its cause, is reported as a usage error.
pub fn parse_args_from<I, T>(args: I) -> Result<CliArgs, FluentIndentError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let usage = || FluentIndentError::Usage {
        program: PROGRAM.to_string(),
    };
    let matches = build_cli().try_get_matches_from(args).map_err(|_| usage())?;
    let file = matches.get_one::<PathBuf>("file").cloned().ok_or_else(usage)?;
    Ok(CliArgs { file })
}
