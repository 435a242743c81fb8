/// Lexical line classification for builder chains
///
/// Every marker decision the indenter and the region extractor make goes
/// through [`MarkerSet::classify`]. Matching is purely lexical: markers inside
/// string literals or trailing comments are not recognised as such.
use regex::Regex;

use crate::config::Config;
use crate::error::FluentIndentError;
use crate::parser::patterns::build_literal_re;

/// Lexical category of a line with its leading whitespace removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// Starts with the comment prefix
    Comment,
    /// Opens a callback body whose lines are preserved as-is
    VerbatimStart,
    /// Exactly the token sequence closing a callback body
    VerbatimEnd,
    /// Closes a nesting level (e.g. `Done().`)
    Dedent,
    /// Opens a nesting level (e.g. `Subcommand(`, `Flag(`, `Arg(`)
    Indent,
    /// Anything else
    Plain,
}

/// Compiled marker patterns
#[derive(Debug, Clone)]
pub struct MarkerSet {
    comment_prefix: String,
    indent_re: Option<Regex>,
    dedent_re: Option<Regex>,
    verbatim_start_re: Option<Regex>,
    verbatim_end: String,
}

impl MarkerSet {
    /// Compile the markers named in `config`
    pub fn from_config(config: &Config) -> Result<Self, FluentIndentError> {
        Ok(Self {
            comment_prefix: config.comment_prefix.clone(),
            indent_re: build_literal_re(&config.indent_markers, true)?,
            dedent_re: build_literal_re(&config.dedent_markers, true)?,
            verbatim_start_re: build_literal_re(
                std::slice::from_ref(&config.verbatim_start),
                false,
            )?,
            verbatim_end: config.verbatim_end.clone(),
        })
    }

    /// Classify a line whose leading whitespace has been stripped.
    ///
    /// Priority: blank, verbatim end, comment, verbatim start, dedent, indent.
    #[must_use]
    pub fn classify(&self, trimmed: &str) -> LineKind {
        if trimmed.trim().is_empty() {
            LineKind::Blank
        } else if trimmed == self.verbatim_end {
            LineKind::VerbatimEnd
        } else if !self.comment_prefix.is_empty() && trimmed.starts_with(&self.comment_prefix) {
            LineKind::Comment
        } else if matches(self.verbatim_start_re.as_ref(), trimmed) {
            LineKind::VerbatimStart
        } else if matches(self.dedent_re.as_ref(), trimmed) {
            LineKind::Dedent
        } else if matches(self.indent_re.as_ref(), trimmed) {
            LineKind::Indent
        } else {
            LineKind::Plain
        }
    }
}

fn matches(re: Option<&Regex>, text: &str) -> bool {
    re.is_some_and(|re| re.is_match(text))
}
