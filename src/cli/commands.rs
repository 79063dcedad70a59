//! CLI commands and argument parsing

use crate::types::RetrievalOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Managed records CLI
#[derive(Parser, Debug)]
#[command(name = "managed-records")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Records endpoint (overrides the config file)
    #[arg(short, long, global = true)]
    pub base_path: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and classify one page of records
    Fetch(PageArgs),

    /// Print the request URL for a page without sending it
    Url(PageArgs),
}

/// Page and filter selection shared by all subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Color filter; repeat for several colors. Omit to disable filtering.
    #[arg(long = "color", value_name = "COLOR")]
    pub colors: Vec<String>,
}

impl From<&PageArgs> for RetrievalOptions {
    fn from(args: &PageArgs) -> Self {
        Self {
            page: args.page,
            colors: (!args.colors.is_empty()).then(|| args.colors.clone()),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::parse_from([
            "managed-records",
            "fetch",
            "--page",
            "3",
            "--color",
            "red",
            "--color",
            "blue",
        ]);

        let Commands::Fetch(args) = &cli.command else {
            panic!("Expected fetch");
        };
        let options = RetrievalOptions::from(args);
        assert_eq!(options.page, Some(3));
        assert_eq!(
            options.colors,
            Some(vec!["red".to_string(), "blue".to_string()])
        );
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_globals_after_subcommand() {
        let cli = Cli::parse_from([
            "managed-records",
            "url",
            "--base-path",
            "http://example.com/records",
            "--format",
            "pretty",
            "-v",
        ]);

        assert!(matches!(cli.command, Commands::Url(_)));
        assert_eq!(
            cli.base_path.as_deref(),
            Some("http://example.com/records")
        );
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(cli.verbose);
    }

    #[test]
    fn test_no_colors_means_no_filter() {
        let options = RetrievalOptions::from(&PageArgs::default());
        assert_eq!(options, RetrievalOptions::default());
    }
}
