//! CLI argument parsing for pagesync.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pagesync: inspect per-page markdown sync configuration.
///
/// Pages are read from a YAML or JSON document with a `pages:` list. Each
/// page may carry a raw `sync` map, which is resolved and normalized the
/// same way the sync pipeline does it.
#[derive(Parser, Debug)]
#[command(name = "pagesync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log resolution decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for pagesync.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every page and whether it takes part in markdown sync.
    Check(CheckArgs),

    /// Print the normalized sync configuration of a page.
    ///
    /// Fails when the page is not configured.
    Show(ShowArgs),

    /// Print the name of one sync field for a page.
    ///
    /// An explicit override is returned as-is without consulting the page.
    Field(FieldArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Page document (YAML or JSON).
    pub file: PathBuf,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Page document (YAML or JSON).
    pub file: PathBuf,

    /// Path of the page to show (e.g., /docs/intro).
    pub page: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Arguments for the `field` command.
#[derive(Parser, Debug)]
pub struct FieldArgs {
    /// Page document (YAML or JSON).
    pub file: PathBuf,

    /// Path of the page.
    pub page: String,

    /// Which field to report.
    #[arg(long, value_enum, default_value_t = FieldKind::Markdown)]
    pub kind: FieldKind,

    /// Explicit field name that bypasses configuration lookup.
    #[arg(long = "override")]
    pub override_field: Option<String>,
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Field selector for `field`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Field holding markdown source.
    Markdown,
    /// Field holding the content hash (defaults to the markdown field).
    Hash,
    /// Field receiving rendered HTML.
    Html,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["pagesync", "check", "pages.yaml"]).unwrap();
        assert!(!cli.verbose);
        if let Command::Check(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("pages.yaml"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_show_defaults_to_yaml() {
        let cli = Cli::try_parse_from(["pagesync", "show", "pages.yaml", "/docs"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.page, "/docs");
            assert_eq!(args.format, OutputFormat::Yaml);
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn parse_show_json() {
        let cli =
            Cli::try_parse_from(["pagesync", "show", "pages.yaml", "/docs", "--format", "json"])
                .unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn parse_field_with_override() {
        let cli = Cli::try_parse_from([
            "pagesync",
            "field",
            "pages.yaml",
            "/docs",
            "--kind",
            "hash",
            "--override",
            "digest",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        if let Command::Field(args) = cli.command {
            assert_eq!(args.kind, FieldKind::Hash);
            assert_eq!(args.override_field.as_deref(), Some("digest"));
        } else {
            panic!("Expected Field command");
        }
    }

    #[test]
    fn parse_field_defaults() {
        let cli = Cli::try_parse_from(["pagesync", "field", "pages.yaml", "/docs"]).unwrap();
        if let Command::Field(args) = cli.command {
            assert_eq!(args.kind, FieldKind::Markdown);
            assert!(args.override_field.is_none());
        } else {
            panic!("Expected Field command");
        }
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        assert!(
            Cli::try_parse_from(["pagesync", "field", "p.yaml", "/d", "--kind", "css"]).is_err()
        );
    }
}
