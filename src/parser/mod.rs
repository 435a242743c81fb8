//! Line classification for fluent builder source.
//!
//! This module provides the lexical layer the indenter and region extractor
//! share:
//! - [`classifier`]: [`LineKind`] and the [`MarkerSet`] deciding it for a trimmed line
//! - [`patterns`]: Marker regex construction and brace counting
//!
//! There is no tokenizer. Markers are recognised by the leading text of a line
//! only, so a marker inside a string literal or comment is still a marker.

pub mod classifier;
pub mod patterns;

pub use classifier::{LineKind, MarkerSet};
pub use patterns::DEFAULT_MARKERS;
