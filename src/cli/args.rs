//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for marklint commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// Marklint CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "marklint")]
#[command(about = "Event-driven linter for HTML markup")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (overrides [output].color)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Log rule activation and per-file progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available marklint subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lint markup files
    Check {
        /// Paths to check (defaults to current directory)
        #[arg(default_value = ".")]
        paths: Vec<String>,

        /// Output format (overrides [output].format)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Configuration file (defaults to ./marklint.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a default marklint.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List the built-in rules
    List {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        /// Configuration file used to show which rules are enabled
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_default_args() {
        let cli = Cli::parse_from(["marklint", "check"]);
        match cli.command {
            Command::Check {
                paths,
                format,
                config,
            } => {
                assert_eq!(paths, vec!["."]);
                assert_eq!(format, None);
                assert_eq!(config, None);
            }
            _ => panic!("Expected Check command"),
        }
        assert_eq!(cli.color, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_check_with_paths_and_options() {
        let cli = Cli::parse_from([
            "marklint",
            "check",
            "site/",
            "docs/index.html",
            "-f",
            "jsonl",
            "--config",
            "ci/marklint.toml",
            "-v",
            "--color",
            "never",
        ]);
        match cli.command {
            Command::Check {
                paths,
                format,
                config,
            } => {
                assert_eq!(paths, vec!["site/", "docs/index.html"]);
                assert_eq!(format, Some(OutputFormat::Jsonl));
                assert_eq!(config, Some(PathBuf::from("ci/marklint.toml")));
            }
            _ => panic!("Expected Check command"),
        }
        assert_eq!(cli.color, Some(ColorChoice::Never));
        assert!(cli.verbose);
    }

    #[test]
    fn test_init_with_force() {
        let cli = Cli::parse_from(["marklint", "init", "--force"]);
        match cli.command {
            Command::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::parse_from(["marklint", "list"]);
        match cli.command {
            Command::List { format, config } => {
                assert_eq!(format, OutputFormat::Human);
                assert_eq!(config, None);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Cli::try_parse_from(["marklint", "check", "--format", "xml"]);
        assert!(result.is_err());
    }
}
