//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading configuration,
//! discovering files and resolving output settings.

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::config::{CONFIG_FILE_NAME, ColorOption, Config};
use crate::engine::file_walker::{FileEntry, FileWalker, FileWalkerError};
use crate::error::ConfigError;
use std::io::IsTerminal;
use std::path::Path;

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DIAGNOSTICS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load marklint.toml configuration
///
/// Uses `path` when given, otherwise `marklint.toml` in the working
/// directory.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file does not exist or cannot be read.
/// Returns `ConfigError::Parse` if the file is not valid TOML.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        return Config::load(path);
    }

    let config_path = Path::new(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "marklint.toml not found. Run 'marklint init' to create it.",
        )));
    }

    Config::load(config_path)
}

/// Discover files to check using FileWalker
///
/// Walks the specified paths and collects all files that match the
/// include/exclude patterns from the configuration. The result is sorted
/// by path and free of duplicates, so overlapping paths are linted once.
///
/// # Errors
///
/// Returns `FileWalkerError` if there is an error walking the file system.
pub(crate) fn discover_files(
    paths: &[String],
    config: &Config,
) -> Result<Vec<FileEntry>, FileWalkerError> {
    let mut all_files = Vec::new();

    for path_str in paths {
        let path = Path::new(path_str);
        let walker = FileWalker::new(path, &config.marklint.include, &config.marklint.exclude)?;

        for result in walker.walk() {
            all_files.push(result?);
        }
    }

    all_files.sort_by(|a, b| a.path.cmp(&b.path));
    all_files.dedup();
    Ok(all_files)
}

/// Picks the output format: command line first, then configuration
pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or(match config.output.format {
        crate::config::OutputFormat::Human => OutputFormat::Human,
        crate::config::OutputFormat::Jsonl => OutputFormat::Jsonl,
    })
}

/// Decides whether to color stdout: command line first, then configuration
///
/// `auto` colors only when stdout is a terminal and `NO_COLOR` is unset.
pub(crate) fn resolve_color(flag: Option<ColorChoice>, config: &Config) -> bool {
    let choice = flag.unwrap_or(match config.output.color {
        ColorOption::Auto => ColorChoice::Auto,
        ColorOption::Always => ColorChoice::Always,
        ColorOption::Never => ColorChoice::Never,
    });

    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}
