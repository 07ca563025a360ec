//! Check command implementation
//!
//! This module implements the `marklint check` command, which:
//! - Loads configuration from marklint.toml
//! - Activates the configured rules
//! - Discovers files to check
//! - Lints them in parallel
//! - Formats output (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_DIAGNOSTICS, EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use crate::engine::{ExecutionEngine, ExecutionResult, Linter};
use crate::error::ConfigError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::rules::RuleRegistry;
use std::io::Write;
use std::path::Path;
use termcolor::{StandardStream, WriteColor};

/// Error type specific to check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File walker error: {0}")]
    FileWalker(#[from] crate::engine::file_walker::FileWalkerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a completed check run found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CheckOutcome {
    diagnostics: usize,
    activation_errors: usize,
}

impl CheckOutcome {
    fn exit_code(&self) -> i32 {
        if self.activation_errors > 0 {
            EXIT_ERROR
        } else if self.diagnostics > 0 {
            EXIT_DIAGNOSTICS
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Run the check command
///
/// # Arguments
///
/// * `paths` - Paths to check (defaults to current directory)
/// * `format` - Output format; falls back to `[output].format`
/// * `config_path` - Configuration file; falls back to `./marklint.toml`
/// * `color` - Color choice; falls back to `[output].color`
///
/// # Returns
///
/// Exit code:
/// - 0: No diagnostics
/// - 1: Diagnostics were reported
/// - 2: Error (configuration/I/O error, or a rule failed to activate)
/// - 3: Parse error (invalid TOML configuration)
pub fn run_check(
    paths: &[String],
    format: Option<OutputFormat>,
    config_path: Option<&Path>,
    color: Option<ColorChoice>,
) -> i32 {
    match run_check_inner(paths, format, config_path, color) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                CheckError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

fn run_check_inner(
    paths: &[String],
    format: Option<OutputFormat>,
    config_path: Option<&Path>,
    color: Option<ColorChoice>,
) -> Result<CheckOutcome, CheckError> {
    let config = super::common::load_config(config_path)?;
    let format = super::common::resolve_format(format, &config);
    let use_color = super::common::resolve_color(color, &config);

    let registry = RuleRegistry::with_builtin_rules();
    let linter = Linter::from_config(&registry, &config);

    for error in linter.activation_errors() {
        eprintln!("Error: {}", error);
    }
    let activation_errors = linter.activation_errors().len();

    if linter.active_rules().is_empty() {
        eprintln!("Warning: No rules are enabled. Nothing to check.");
        return Ok(CheckOutcome {
            diagnostics: 0,
            activation_errors,
        });
    }

    let files = super::common::discover_files(paths, &config)?;

    if files.is_empty() {
        eprintln!("Warning: No files found to check.");
        return Ok(CheckOutcome {
            diagnostics: 0,
            activation_errors,
        });
    }

    if format == OutputFormat::Human {
        eprintln!(
            "Checking {} files with {} rules...",
            files.len(),
            linter.active_rules().len()
        );
    }

    let engine = ExecutionEngine::new(linter);
    let result = engine.execute(files);

    match format {
        OutputFormat::Human => print_human_output(&result, use_color)?,
        OutputFormat::Jsonl => print!("{}", JsonlFormatter::new().format(&result)),
    }

    Ok(CheckOutcome {
        diagnostics: result.total_diagnostics(),
        activation_errors,
    })
}

fn print_human_output(result: &ExecutionResult, use_color: bool) -> std::io::Result<()> {
    let choice = if use_color {
        termcolor::ColorChoice::Always
    } else {
        termcolor::ColorChoice::Never
    };
    let stdout = StandardStream::stdout(choice);
    let mut out = stdout.lock();

    HumanFormatter::new(use_color).write_to(&mut out, result)?;
    out.reset()?;
    out.flush()
}
