//! Integration tests for fluent-indent
//!
//! These tests run whole documents through the public pipeline

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{BufReader, Cursor};

use fluent_indent::format::FluentIndenter;
use fluent_indent::parser::DEFAULT_MARKERS;
use fluent_indent::process::{format_document_with_stats, format_file};
use fluent_indent::{format_document, Config};
use pretty_assertions::assert_eq;

const ROOT_COMMAND: &str = r#"package main

import (
	"fmt"

	cf "github.com/example/autocli"
)

func buildRootCommand() *cf.Command {
	return cf.NewCommand("ssql").
		Version(version.Version).
		Description("Unix-style data processing tools").

		// Root global flags
		Flag("-verbose", "-v").
		Bool().
		Global().
		Help("Enable verbose output").
		Done().

		// Subcommand: version
		Subcommand("version").
		Description("Show version information").
		Handler(func(ctx *cf.Context) error {
			fmt.Printf("ssql v%s\n", version.Version)
			return nil
		}).
		Done().

		// Subcommand: limit
		Subcommand("limit").
		Flag("N").
		Int().
		Required().
		Done().
		Arg("file").
		Help("Input file").
		Done().
		Handler(func(ctx *cf.Context) error {
					// Get flags from context
			if nVal, ok := ctx.GlobalFlags["N"]; ok {
				n = nVal.(int)
			}
  
			return nil
		}).
		Done().
		Build()
}

func main() {
	cmd := buildRootCommand()
	cmd.Execute()
}
"#;

const ROOT_COMMAND_FORMATTED: &str = r#"package main

import (
	"fmt"

	cf "github.com/example/autocli"
)

func buildRootCommand() *cf.Command {
	return cf.NewCommand("ssql").
		Version(version.Version).
		Description("Unix-style data processing tools").

		// Root global flags
		Flag("-verbose", "-v").
			Bool().
			Global().
			Help("Enable verbose output").
		Done().

		// Subcommand: version
		Subcommand("version").
			Description("Show version information").
			Handler(func(ctx *cf.Context) error {
			fmt.Printf("ssql v%s\n", version.Version)
			return nil
			}).
		Done().

		// Subcommand: limit
		Subcommand("limit").
			Flag("N").
				Int().
				Required().
			Done().
			Arg("file").
				Help("Input file").
			Done().
			Handler(func(ctx *cf.Context) error {
			// Get flags from context
			if nVal, ok := ctx.GlobalFlags["N"]; ok {
				n = nVal.(int)
			}

			return nil
			}).
		Done().
		Build()
}

func main() {
	cmd := buildRootCommand()
	cmd.Execute()
}
"#;

fn indent(level: usize, text: &str) -> String {
    format!("{}{text}", "\t".repeat(level))
}

#[test]
fn test_root_command_document() {
    let config = Config::default();
    let result = format_document(ROOT_COMMAND, &config).unwrap();
    assert_eq!(result, ROOT_COMMAND_FORMATTED);
}

#[test]
fn test_root_command_is_idempotent() {
    let config = Config::default();
    let once = format_document(ROOT_COMMAND, &config).unwrap();
    let twice = format_document(&once, &config).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_root_command_stats() {
    let config = Config::default();
    let (_, stats) = format_document_with_stats(ROOT_COMMAND, &config).unwrap();
    assert!(stats.region_found);
    assert_eq!(stats.verbatim_blocks, 2);
    assert_eq!(stats.verbatim_lines, 6);
    assert!(!stats.unterminated_verbatim);
}

#[test]
fn test_nested_subcommand_and_flag() {
    let config = Config::default();
    let body = ["Subcommand(", "Flag(", "Done().", "Done()."];
    let (out, _) = FluentIndenter::new(&DEFAULT_MARKERS, &config).reindent(&body);

    assert_eq!(
        out,
        vec![
            indent(2, "Subcommand("),
            indent(3, "Flag("),
            indent(3, "Done()."),
            indent(2, "Done()."),
        ]
    );
}

#[test]
fn test_handler_interior_unchanged() {
    let config = Config::default();
    let body = [
        "  Handler(func(ctx) {",
        "      weird   indentation",
        "\t \tmixed tabs",
        "   }).",
    ];
    let (out, _) = FluentIndenter::new(&DEFAULT_MARKERS, &config).reindent(&body);

    assert_eq!(
        out,
        vec![
            indent(2, "Handler(func(ctx) {"),
            body[1].to_string(),
            body[2].to_string(),
            indent(2, "})."),
        ]
    );
}

#[test]
fn test_document_without_signature_is_byte_equal() {
    let config = Config::default();
    let text = "package main\n\nfunc other() *cf.Command {\n\t\t\tSubcommand(\"x\").\n}";
    assert_eq!(format_document(text, &config).unwrap(), text);
}

#[test]
fn test_missing_final_newline_is_added() {
    let config = Config::default();
    let text = "func buildRootCommand() *cf.Command {\n\treturn cf.NewCommand(\"x\").\n\t\tBuild()\n}";
    let result = format_document(text, &config).unwrap();
    assert_eq!(result, format!("{text}\n"));
}

#[test]
fn test_unterminated_handler_preserves_rest() {
    let config = Config::default();
    let text = "func buildRootCommand() *cf.Command {\n\
        \treturn cf.NewCommand(\"x\").\n\
        \t\tHandler(func(ctx *cf.Context) error {\n\
        \t\t\treturn nil\n\
        }\n\
        \n\
        func main() {\n\
        }\n";
    let (result, stats) = format_document_with_stats(text, &config).unwrap();
    assert_eq!(result, text);
    assert!(stats.unterminated_verbatim);
}

#[test]
fn test_crlf_document_formats_like_lf() {
    let config = Config::default();
    let crlf = ROOT_COMMAND.replace('\n', "\r\n");
    let result = format_document(&crlf, &config).unwrap();
    assert_eq!(result, ROOT_COMMAND_FORMATTED);
}

#[test]
fn test_crlf_document_without_signature_is_byte_equal() {
    let config = Config::default();
    let text = "package main\r\n\r\nfunc main() {\r\n}\r\n";
    assert_eq!(format_document(text, &config).unwrap(), text);
}

#[test]
fn test_format_file_reader_writer() {
    let config = Config::default();
    let reader = BufReader::new(Cursor::new(ROOT_COMMAND.as_bytes()));
    let mut output = Vec::new();

    format_file(reader, &mut output, &config).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), ROOT_COMMAND_FORMATTED);
}

#[test]
fn test_custom_markers_and_spaces() {
    let config: Config = toml::from_str(
        r##"
base_indent = 1
indent_char = " "
indent_width = 4
signature = "def build_parser("
header_lines = 1
comment_prefix = "#"
indent_markers = ["command("]
dedent_markers = ["end()"]
verbatim_start = "on_run(lambda"
verbatim_end = "))"
region_end_prefix = "# end"
"##,
    )
    .unwrap();

    let text = "def build_parser():\n\
        \x20   return (Parser()\n\
        command(\"a\")\n\
        # a comment\n\
        option(\"x\")\n\
        on_run(lambda ctx: (\n\
        \x20       run(ctx),\n\
        ))\n\
        end()\n\
        build())\n\
        # end build_parser\n";
    let expected = "def build_parser():\n\
        \x20   return (Parser()\n\
        \x20   command(\"a\")\n\
        \x20       # a comment\n\
        \x20       option(\"x\")\n\
        \x20       on_run(lambda ctx: (\n\
        \x20       run(ctx),\n\
        \x20       ))\n\
        \x20   end()\n\
        \x20   build())\n\
        # end build_parser\n";

    assert_eq!(format_document(text, &config).unwrap(), expected);
}
