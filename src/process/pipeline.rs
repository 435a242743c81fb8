//! Single-pass formatting pipeline
//!
//! Text → region split → state machine over the body → reassembly. All output
//! is computed in memory before anything is written back.

use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::FluentIndentError;
use crate::format::{FluentIndenter, FormatStats};
use crate::parser::MarkerSet;
use crate::region::{split_lines, RegionExtractor};
use crate::Result;

/// What happened to a file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// New content was written
    Changed,
    /// Content was already formatted; the file was not rewritten
    Unchanged,
}

/// Re-indent the builder region of `text`
pub fn format_document(text: &str, config: &Config) -> Result<String> {
    format_document_with_stats(text, config).map(|(formatted, _)| formatted)
}

/// Re-indent the builder region of `text`, reporting what was done.
///
/// Without the target signature the input is returned unchanged, byte for
/// byte. Otherwise every output line ends with a newline.
pub fn format_document_with_stats(text: &str, config: &Config) -> Result<(String, FormatStats)> {
    config.ensure_valid()?;
    let markers = MarkerSet::from_config(config)?;

    let lines = split_lines(text);
    let region = RegionExtractor::new(config, &markers).extract(&lines);
    if !region.is_found() {
        warn!(
            signature = %config.signature,
            "signature not found; document left unchanged"
        );
        return Ok((text.to_string(), FormatStats::default()));
    }

    let (body, mut stats) = FluentIndenter::new(&markers, config).reindent(region.body);
    stats.region_found = true;
    debug!(?stats, "re-indented builder region");

    Ok((region.rewrite(&body), stats))
}

/// Format everything readable from `input` into `output`
pub fn format_file<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    config: &Config,
) -> Result<FormatStats> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let (formatted, stats) = format_document_with_stats(&text, config)?;
    output.write_all(formatted.as_bytes())?;
    Ok(stats)
}

/// Format a file in place
pub fn format_path(path: &Path, config: &Config) -> Result<Outcome> {
    let original = std::fs::read_to_string(path).map_err(|source| FluentIndentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let formatted = format_document(&original, config)
        .with_context(|| format!("formatting {}", path.display()))?;
    if formatted == original {
        return Ok(Outcome::Unchanged);
    }

    std::fs::write(path, formatted).map_err(|source| FluentIndentError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Outcome::Changed)
}

/// Format many files in place, in parallel
///
/// Each file gets its own indent context; results come back in input order.
#[must_use]
pub fn format_paths(paths: &[PathBuf], config: &Config) -> Vec<(PathBuf, Result<Outcome>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), format_path(path, config)))
        .collect()
}
