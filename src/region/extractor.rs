/// Region extractor - splits a document around the target function body
use tracing::debug;

use crate::config::Config;
use crate::parser::classifier::{LineKind, MarkerSet};

/// Split text into lines on `\n` or `\r\n`.
///
/// A trailing newline does not produce a final empty line. One `\r` before
/// each newline is dropped, so CRLF input is rewritten with LF endings.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_terminator('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// A document cut into untouched prefix, reformattable body and untouched suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<'a> {
    /// Lines up to and including the signature and header lines
    pub prefix: &'a [&'a str],
    /// Lines of the function body handed to the indenter
    pub body: &'a [&'a str],
    /// The closing line of the function and everything after it
    pub suffix: &'a [&'a str],
    /// Zero-based index of the signature line, if found
    pub signature_line: Option<usize>,
}

impl Region<'_> {
    /// Whether the target function was located
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.signature_line.is_some()
    }

    /// Concatenate prefix, rewritten body and suffix
    #[must_use]
    pub fn rewrite<S: AsRef<str>>(&self, body: &[S]) -> String {
        rewrite(self.prefix, body, self.suffix)
    }
}

/// Join the three parts, ending every line with a newline
#[must_use]
pub fn rewrite<S: AsRef<str>>(prefix: &[&str], body: &[S], suffix: &[&str]) -> String {
    let size = prefix.iter().map(|l| l.len() + 1).sum::<usize>()
        + body.iter().map(|l| l.as_ref().len() + 1).sum::<usize>()
        + suffix.iter().map(|l| l.len() + 1).sum::<usize>();
    let mut out = String::with_capacity(size);

    for line in prefix {
        out.push_str(line);
        out.push('\n');
    }
    for line in body {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    for line in suffix {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Locates the function whose body holds the builder chain
pub struct RegionExtractor<'m> {
    signature: &'m str,
    header_lines: usize,
    end_prefix: &'m str,
    verbatim_end: &'m str,
    markers: &'m MarkerSet,
}

impl<'m> RegionExtractor<'m> {
    #[must_use]
    pub fn new(config: &'m Config, markers: &'m MarkerSet) -> Self {
        Self {
            signature: &config.signature,
            header_lines: config.header_lines,
            end_prefix: &config.region_end_prefix,
            verbatim_end: &config.verbatim_end,
            markers,
        }
    }

    /// Split `lines` into prefix, body and suffix.
    ///
    /// The first line containing the signature starts the region, and the
    /// following header lines stay in the prefix. The body ends before the
    /// first line that starts with the end prefix, is not a verbatim exit
    /// line and is not inside an open verbatim block. Without a signature the
    /// whole document is the prefix. Without an end line the body runs to the
    /// end of the document.
    #[must_use]
    pub fn extract<'a>(&self, lines: &'a [&'a str]) -> Region<'a> {
        let Some(start) = lines.iter().position(|l| l.contains(self.signature)) else {
            debug!(signature = self.signature, "signature not found");
            return Region {
                prefix: lines,
                body: &[],
                suffix: &[],
                signature_line: None,
            };
        };

        let body_start = (start + 1 + self.header_lines).min(lines.len());
        let body_len = self.body_len(&lines[body_start..]);
        let body_end = body_start + body_len;

        debug!(
            signature_line = start + 1,
            body_lines = body_len,
            "located builder region"
        );

        Region {
            prefix: &lines[..body_start],
            body: &lines[body_start..body_end],
            suffix: &lines[body_end..],
            signature_line: Some(start),
        }
    }

    fn body_len(&self, lines: &[&str]) -> usize {
        let mut in_verbatim = false;
        for (idx, line) in lines.iter().enumerate() {
            let kind = self.markers.classify(line.trim_start());
            if in_verbatim {
                if kind == LineKind::VerbatimEnd {
                    in_verbatim = false;
                }
                continue;
            }
            if line.starts_with(self.end_prefix) && !line.contains(self.verbatim_end) {
                return idx;
            }
            if kind == LineKind::VerbatimStart {
                in_verbatim = true;
            }
        }
        lines.len()
    }
}
