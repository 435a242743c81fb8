//! Configuration management for fluent-indent.
//!
//! This module provides the [`Config`] struct which controls region lookup,
//! marker recognition and the indentation unit. Defaults reproduce the
//! behaviour for Go `autocli` builder chains inside `buildRootCommand()`.
//!
//! Config files (`fluent-indent.toml`) are auto-discovered by searching the
//! ancestors of the file being formatted. Nearer files override farther ones,
//! field by field.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::FluentIndentError;

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["fluent-indent.toml"];

// Serde default functions
fn default_base_indent() -> usize {
    2
}
fn default_indent_char() -> String {
    "\t".to_string()
}
fn default_indent_width() -> usize {
    1
}
fn default_signature() -> String {
    "func buildRootCommand()".to_string()
}
fn default_header_lines() -> usize {
    1
}
fn default_comment_prefix() -> String {
    "//".to_string()
}
fn default_indent_markers() -> Vec<String> {
    vec![
        "Subcommand(".to_string(),
        "Flag(".to_string(),
        "Arg(".to_string(),
    ]
}
fn default_dedent_markers() -> Vec<String> {
    vec!["Done().".to_string()]
}
fn default_verbatim_start() -> String {
    "Handler(func".to_string()
}
fn default_verbatim_end() -> String {
    "}).".to_string()
}
fn default_region_end_prefix() -> String {
    "}".to_string()
}

/// Main configuration struct for fluent-indent
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Indent level of the outermost builder calls (default: 2)
    #[serde(default = "default_base_indent")]
    pub base_indent: usize,

    /// Character(s) making up one indent step (default: tab)
    #[serde(default = "default_indent_char")]
    pub indent_char: String,

    /// Repetitions of `indent_char` per level (default: 1)
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Literal substring locating the target function (default: `func buildRootCommand()`)
    #[serde(default = "default_signature")]
    pub signature: String,

    /// Lines after the signature copied verbatim into the prefix (default: 1)
    #[serde(default = "default_header_lines")]
    pub header_lines: usize,

    /// Line comment marker (default: `//`)
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,

    /// Prefixes that open a nesting level for the following lines
    #[serde(default = "default_indent_markers")]
    pub indent_markers: Vec<String>,

    /// Prefixes that close a nesting level before the line is emitted
    #[serde(default = "default_dedent_markers")]
    pub dedent_markers: Vec<String>,

    /// Substring that opens a verbatim (callback body) block
    #[serde(default = "default_verbatim_start")]
    pub verbatim_start: String,

    /// Exact trimmed line that closes a verbatim block
    #[serde(default = "default_verbatim_end")]
    pub verbatim_end: String,

    /// Prefix of the unindented line closing the target function
    #[serde(default = "default_region_end_prefix")]
    pub region_end_prefix: String,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub base_indent: Option<usize>,
    pub indent_char: Option<String>,
    pub indent_width: Option<usize>,
    pub signature: Option<String>,
    pub header_lines: Option<usize>,
    pub comment_prefix: Option<String>,
    pub indent_markers: Option<Vec<String>>,
    pub dedent_markers: Option<Vec<String>>,
    pub verbatim_start: Option<String>,
    pub verbatim_end: Option<String>,
    pub region_end_prefix: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_indent: default_base_indent(),
            indent_char: default_indent_char(),
            indent_width: default_indent_width(),
            signature: default_signature(),
            header_lines: default_header_lines(),
            comment_prefix: default_comment_prefix(),
            indent_markers: default_indent_markers(),
            dedent_markers: default_dedent_markers(),
            verbatim_start: default_verbatim_start(),
            verbatim_end: default_verbatim_end(),
            region_end_prefix: default_region_end_prefix(),
        }
    }
}

impl Config {
    /// Maximum reasonable base indent
    const MAX_BASE_INDENT: usize = 32;
    /// Maximum repetitions of `indent_char` per level
    const MAX_INDENT_WIDTH: usize = 16;
    /// Maximum header lines kept after the signature
    const MAX_HEADER_LINES: usize = 8;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.base_indent > Self::MAX_BASE_INDENT {
            return Some(format!(
                "base_indent {} exceeds maximum of {}",
                self.base_indent,
                Self::MAX_BASE_INDENT
            ));
        }
        if self.indent_char.is_empty() {
            return Some("indent_char must not be empty".to_string());
        }
        if self.indent_width == 0 {
            return Some("indent_width must be at least 1".to_string());
        }
        if self.indent_width > Self::MAX_INDENT_WIDTH {
            return Some(format!(
                "indent_width {} exceeds maximum of {}",
                self.indent_width,
                Self::MAX_INDENT_WIDTH
            ));
        }
        if self.header_lines > Self::MAX_HEADER_LINES {
            return Some(format!(
                "header_lines {} exceeds maximum of {}",
                self.header_lines,
                Self::MAX_HEADER_LINES
            ));
        }
        if self.signature.is_empty() {
            return Some("signature must not be empty".to_string());
        }
        if self.verbatim_end.is_empty() {
            return Some("verbatim_end must not be empty".to_string());
        }
        if self.region_end_prefix.is_empty() {
            return Some("region_end_prefix must not be empty".to_string());
        }
        None
    }

    /// Validate, converting the message into a typed error
    pub fn ensure_valid(&self) -> Result<(), FluentIndentError> {
        match self.validate() {
            Some(message) => Err(FluentIndentError::InvalidConfig(message)),
            None => Ok(()),
        }
    }

    /// The whitespace emitted for one indent level
    #[must_use]
    pub fn indent_unit(&self) -> String {
        self.indent_char.repeat(self.indent_width)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, FluentIndentError> {
        let mut config = Self::default();
        config.apply_partial(&read_partial(path)?);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.base_indent {
            self.base_indent = v;
        }
        if let Some(v) = &partial.indent_char {
            self.indent_char.clone_from(v);
        }
        if let Some(v) = partial.indent_width {
            self.indent_width = v;
        }
        if let Some(v) = &partial.signature {
            self.signature.clone_from(v);
        }
        if let Some(v) = partial.header_lines {
            self.header_lines = v;
        }
        if let Some(v) = &partial.comment_prefix {
            self.comment_prefix.clone_from(v);
        }
        if let Some(v) = &partial.indent_markers {
            self.indent_markers.clone_from(v);
        }
        if let Some(v) = &partial.dedent_markers {
            self.dedent_markers.clone_from(v);
        }
        if let Some(v) = &partial.verbatim_start {
            self.verbatim_start.clone_from(v);
        }
        if let Some(v) = &partial.verbatim_end {
            self.verbatim_end.clone_from(v);
        }
        if let Some(v) = &partial.region_end_prefix {
            self.region_end_prefix.clone_from(v);
        }
    }

    /// Discover config files from the ancestors of a given path
    ///
    /// Returns config file paths ordered from the filesystem root towards
    /// the file (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let start_dir = if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            start_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .or_else(|| std::env::current_dir().ok())
        };

        let mut config_files = Vec::new();
        if let Some(dir) = start_dir {
            let mut ancestors: Vec<&Path> = dir.ancestors().collect();
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    pub fn from_discovered_files(start_path: &Path) -> Result<Self, FluentIndentError> {
        let mut config = Self::default();
        for path in Self::discover_config_files(start_path) {
            debug!(config = %path.display(), "applying config file");
            config.apply_partial(&read_partial(&path)?);
        }
        config.ensure_valid()?;
        Ok(config)
    }
}

fn read_partial(path: &Path) -> Result<PartialConfig, FluentIndentError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| FluentIndentError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| FluentIndentError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_indent, 2);
        assert_eq!(config.indent_unit(), "\t");
        assert_eq!(config.signature, "func buildRootCommand()");
        assert_eq!(config.header_lines, 1);
        assert_eq!(
            config.indent_markers,
            vec!["Subcommand(", "Flag(", "Arg("]
        );
        assert_eq!(config.dedent_markers, vec!["Done()."]);
        assert_eq!(config.verbatim_end, "}).");
    }

    #[test]
    fn test_indent_unit_spaces() {
        let config = Config {
            indent_char: " ".to_string(),
            indent_width: 4,
            ..Default::default()
        };
        assert_eq!(config.indent_unit(), "    ");
    }

    #[test]
    fn test_config_apply_partial_preserves_unset() {
        let mut base = Config {
            base_indent: 1,
            ..Default::default()
        };

        let partial = PartialConfig {
            signature: Some("func build()".to_string()),
            ..Default::default()
        };

        base.apply_partial(&partial);
        assert_eq!(base.base_indent, 1);
        assert_eq!(base.signature, "func build()");
        assert_eq!(base.verbatim_start, "Handler(func");
    }

    #[test]
    fn test_config_apply_partial_replaces_marker_lists() {
        let mut base = Config::default();
        let partial: PartialConfig =
            toml::from_str("indent_markers = [\"Group(\"]\n").unwrap();

        base.apply_partial(&partial);
        assert_eq!(base.indent_markers, vec!["Group("]);
        assert_eq!(base.dedent_markers, vec!["Done()."]);
    }

    #[test]
    fn test_full_config_deserializes_with_defaults() {
        let config: Config = toml::from_str("base_indent = 1\nindent_char = \" \"\n").unwrap();
        assert_eq!(config.base_indent, 1);
        assert_eq!(config.indent_char, " ");
        assert_eq!(config.signature, "func buildRootCommand()");
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fluent-indent.toml");
        std::fs::write(&path, "base_indent = 3\nheader_lines = 0\n").unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        assert_eq!(config.base_indent, 3);
        assert_eq!(config.header_lines, 0);
    }

    #[test]
    fn test_from_toml_file_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fluent-indent.toml");
        std::fs::write(&path, "base_indent = \"two\"\n").unwrap();

        let err = Config::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, FluentIndentError::ConfigParse { .. }));
    }

    #[test]
    fn test_discovered_files_nearest_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("cmd").join("tool");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join("fluent-indent.toml"),
            "base_indent = 3\nindent_char = \" \"\n",
        )
        .unwrap();
        std::fs::write(nested.join("fluent-indent.toml"), "base_indent = 1\n").unwrap();

        let file = nested.join("main.go");
        std::fs::write(&file, "package main\n").unwrap();

        let config = Config::from_discovered_files(&file).unwrap();
        assert_eq!(config.base_indent, 1);
        assert_eq!(config.indent_char, " ");
    }

    #[test]
    fn test_discovered_invalid_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fluent-indent.toml"), "indent_width = 0\n").unwrap();
        let file = dir.path().join("main.go");
        std::fs::write(&file, "package main\n").unwrap();

        let err = Config::from_discovered_files(&file).unwrap_err();
        assert!(matches!(err, FluentIndentError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(
            Config::default().validate().is_none(),
            "Default config should be valid"
        );
    }

    #[test]
    fn test_validate_base_indent_too_large() {
        let config = Config {
            base_indent: 100,
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("base_indent"));
    }

    #[test]
    fn test_validate_empty_indent_char() {
        let config = Config {
            indent_char: String::new(),
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("indent_char"));
    }

    #[test]
    fn test_validate_empty_signature() {
        let config = Config {
            signature: String::new(),
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("signature"));
    }

    #[test]
    fn test_validate_empty_verbatim_end() {
        let config = Config {
            verbatim_end: String::new(),
            ..Default::default()
        };
        assert!(config.ensure_valid().is_err());
    }
}
