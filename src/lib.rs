//! fluent-indent - Structural re-indenter for fluent builder chains
//!
//! Finds one target function in a source document and re-indents the chained
//! builder calls in its body so that indentation follows nesting depth.
//! Callback bodies inside the chain are copied through untouched.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;
pub mod region;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::{FluentIndentError, Result};
pub use format::{FluentIndenter, FormatStats, IndentContext};
pub use parser::{LineKind, MarkerSet};
pub use process::{format_document, format_path, Outcome};
pub use region::{Region, RegionExtractor};
