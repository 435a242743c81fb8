/// Regex patterns for fluent builder markers
///
/// Marker lists come from [`Config`](crate::Config) and are compiled into
/// literal-escaped regexes. The default marker set is compiled once at
/// startup using `LazyLock`.
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::config::Config;
use crate::error::FluentIndentError;
use crate::parser::classifier::MarkerSet;

/// Default marker set, matching `autocli` builder chains in Go.
///
/// # Panics
///
/// Panics at first access if the default markers fail to compile. They are
/// escaped literals and are verified by tests.
pub static DEFAULT_MARKERS: LazyLock<MarkerSet> = LazyLock::new(|| {
    MarkerSet::from_config(&Config::default())
        .unwrap_or_else(|e| panic!("Invalid default markers: {e}"))
});

/// Build a regex matching any of `literals`.
///
/// With `anchored`, the literal must start the (already trimmed) line.
/// Returns `None` for an empty list so that nothing matches.
pub fn build_literal_re(
    literals: &[String],
    anchored: bool,
) -> Result<Option<Regex>, FluentIndentError> {
    let alternatives: Vec<String> = literals
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| regex::escape(l))
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }

    let anchor = if anchored { "^" } else { "" };
    let pattern = format!("{anchor}(?:{})", alternatives.join("|"));
    RegexBuilder::new(&pattern)
        .unicode(true)
        .build()
        .map(Some)
        .map_err(|source| FluentIndentError::InvalidPattern { pattern, source })
}

/// Net count of `{` minus `}` on a line
#[must_use]
pub fn net_braces(line: &str) -> i64 {
    line.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}
