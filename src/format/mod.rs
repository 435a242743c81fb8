//! Builder-chain re-indentation.
//!
//! - [`indenter`]: The normal/verbatim state machine that assigns an indent
//!   level to every line of a region and preserves callback bodies untouched

pub mod indenter;

pub use indenter::{Emitted, FluentIndenter, FormatStats, IndentContext};
