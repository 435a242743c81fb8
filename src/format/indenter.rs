/// `FluentIndenter` - Nesting-depth re-indenter for builder chains
///
/// Replays the lines of one region through a two-state machine (normal and
/// verbatim). The only mutable state is an [`IndentContext`], passed into and
/// returned from [`FluentIndenter::transition`] for every line.
use tracing::{trace, warn};

use crate::config::Config;
use crate::parser::classifier::{LineKind, MarkerSet};
use crate::parser::patterns::net_braces;

/// State threaded through one region pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentContext {
    /// Current nesting level, never below `base_indent`
    pub indent_level: usize,
    /// Inside a callback body whose lines are preserved as-is
    pub in_verbatim: bool,
    /// Open minus close braces seen since the verbatim block started
    pub brace_balance: i64,
    base_indent: usize,
}

impl IndentContext {
    #[must_use]
    pub fn new(base_indent: usize) -> Self {
        Self {
            indent_level: base_indent,
            in_verbatim: false,
            brace_balance: 0,
            base_indent,
        }
    }

    #[must_use]
    pub fn base_indent(&self) -> usize {
        self.base_indent
    }

    fn opened(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    fn closed(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1).max(self.base_indent);
        self
    }
}

/// One output line, before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted<'l> {
    /// Empty output line
    Blank,
    /// Trimmed text placed at `level` indent units
    Indented { level: usize, text: &'l str },
    /// Input line copied byte for byte
    Verbatim(&'l str),
}

impl Emitted<'_> {
    /// Render with `unit` repeated once per level
    #[must_use]
    pub fn render(&self, unit: &str) -> String {
        match *self {
            Emitted::Blank => String::new(),
            Emitted::Indented { level, text } => {
                let mut line = String::with_capacity(unit.len() * level + text.len());
                for _ in 0..level {
                    line.push_str(unit);
                }
                line.push_str(text);
                line
            }
            Emitted::Verbatim(raw) => raw.to_string(),
        }
    }
}

/// Counters collected while formatting one document
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatStats {
    /// The target signature was found
    pub region_found: bool,
    /// Lines placed at a computed indent level
    pub reindented_lines: usize,
    /// Lines copied unchanged from inside callback bodies
    pub verbatim_lines: usize,
    /// Callback bodies entered
    pub verbatim_blocks: usize,
    /// The region ended inside a callback body
    pub unterminated_verbatim: bool,
}

/// `FluentIndenter` maps region lines to re-indented lines
pub struct FluentIndenter<'m> {
    markers: &'m MarkerSet,
    indent_unit: String,
    base_indent: usize,
}

impl<'m> FluentIndenter<'m> {
    #[must_use]
    pub fn new(markers: &'m MarkerSet, config: &Config) -> Self {
        Self {
            markers,
            indent_unit: config.indent_unit(),
            base_indent: config.base_indent,
        }
    }

    /// Fresh context for a new region
    #[must_use]
    pub fn start(&self) -> IndentContext {
        IndentContext::new(self.base_indent)
    }

    /// Advance the state machine by one raw line.
    ///
    /// Indent markers take effect after their own line; dedent markers take
    /// effect before theirs. Blank and comment lines are normalized in both
    /// states and never touch `brace_balance`. Inside a verbatim block every
    /// other line except the exact closing token is returned untouched.
    #[must_use]
    pub fn transition<'l>(
        &self,
        mut ctx: IndentContext,
        raw: &'l str,
    ) -> (IndentContext, Emitted<'l>) {
        let trimmed = raw.trim_start();
        let kind = self.markers.classify(trimmed);
        let at = |level: usize| Emitted::Indented {
            level,
            text: trimmed,
        };

        match kind {
            LineKind::Blank => (ctx, Emitted::Blank),
            LineKind::Comment => (ctx, at(ctx.indent_level)),
            _ if ctx.in_verbatim => {
                ctx.brace_balance += net_braces(trimmed);
                if kind == LineKind::VerbatimEnd {
                    ctx.in_verbatim = false;
                    (ctx, at(ctx.indent_level))
                } else {
                    (ctx, Emitted::Verbatim(raw))
                }
            }
            LineKind::VerbatimStart => {
                ctx.in_verbatim = true;
                ctx.brace_balance = net_braces(trimmed);
                (ctx, at(ctx.indent_level))
            }
            LineKind::Dedent => {
                let ctx = ctx.closed();
                (ctx, at(ctx.indent_level))
            }
            LineKind::Indent => (ctx.opened(), at(ctx.indent_level)),
            LineKind::VerbatimEnd | LineKind::Plain => (ctx, at(ctx.indent_level)),
        }
    }

    /// Re-indent a whole region body, one output line per input line
    pub fn reindent<S: AsRef<str>>(&self, lines: &[S]) -> (Vec<String>, FormatStats) {
        let mut output = Vec::with_capacity(lines.len());
        let mut stats = FormatStats::default();
        let mut ctx = self.start();

        for (idx, line) in lines.iter().enumerate() {
            let was_verbatim = ctx.in_verbatim;
            let (next, emitted) = self.transition(ctx, line.as_ref());
            trace!(
                line = idx + 1,
                level = next.indent_level,
                verbatim = next.in_verbatim,
                "indent transition"
            );

            if !was_verbatim && next.in_verbatim {
                stats.verbatim_blocks += 1;
            }
            match emitted {
                Emitted::Blank => {}
                Emitted::Indented { .. } => stats.reindented_lines += 1,
                Emitted::Verbatim(_) => stats.verbatim_lines += 1,
            }

            output.push(emitted.render(&self.indent_unit));
            ctx = next;
        }

        if ctx.in_verbatim {
            stats.unterminated_verbatim = true;
            warn!(
                brace_balance = ctx.brace_balance,
                "region ended inside a callback body; trailing lines kept unchanged"
            );
        }

        (output, stats)
    }
}
