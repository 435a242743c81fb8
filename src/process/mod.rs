//! Document and file processing.
//!
//! The formatting pipeline runs once per document:
//!
//! - Split the text into lines and locate the target function
//! - Replay the function body through the indentation state machine
//! - Reassemble prefix, rewritten body and suffix
//!
//! [`format_document`] works on text, [`format_file`] on a buffered reader and
//! any `Write` implementation, and [`format_path`] rewrites a file in place.

pub mod pipeline;

pub use pipeline::{
    format_document, format_document_with_stats, format_file, format_path, format_paths, Outcome,
};
