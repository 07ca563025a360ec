//! Initialize a marklint project
//!
//! Writes a commented default `marklint.toml`.

use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::CONFIG_FILE_NAME;
use std::fs;
use std::path::Path;

/// Default content for marklint.toml
const DEFAULT_MARKLINT_TOML: &str = r#"[marklint]
version = "1"

# File patterns to include
include = ["**/*.html", "**/*.htm"]

# File patterns to exclude
# exclude = ["**/vendor/**"]

[rules]
# Indentation: "tab", "space", or { pattern = "...", message = "..." }
indent = "space"

# Switch-only rules: true to enable, false to disable
tagname-lowercase = true
# style-disabled = true

[output]
format = "human"
color = "auto"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path '{0}' exists but is not a file")]
    NotAFile(String),
}

/// What init did with the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    /// Already present and `--force` was not given
    Skipped,
    Overwritten,
}

/// Run the init command in the working directory
///
/// # Returns
///
/// Exit code:
/// - 0: File created, overwritten or left in place
/// - 2: I/O error
pub fn run_init(force: bool) -> i32 {
    match init_in(Path::new("."), force) {
        Ok(InitOutcome::Created) => {
            println!("Created {}.", CONFIG_FILE_NAME);
            EXIT_SUCCESS
        }
        Ok(InitOutcome::Overwritten) => {
            println!("Overwrote {}.", CONFIG_FILE_NAME);
            EXIT_SUCCESS
        }
        Ok(InitOutcome::Skipped) => {
            eprintln!(
                "{} already exists. Use --force to overwrite it.",
                CONFIG_FILE_NAME
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Writes the default configuration file into `dir`
///
/// # Arguments
/// * `dir` - Directory that receives `marklint.toml`
/// * `force` - If true, overwrite an existing file. If false, leave it alone.
pub fn init_in(dir: &Path, force: bool) -> Result<InitOutcome, InitError> {
    let path = dir.join(CONFIG_FILE_NAME);

    if !path.exists() {
        fs::write(&path, DEFAULT_MARKLINT_TOML)?;
        return Ok(InitOutcome::Created);
    }

    if !path.is_file() {
        return Err(InitError::NotAFile(path.display().to_string()));
    }

    if force {
        fs::write(&path, DEFAULT_MARKLINT_TOML)?;
        Ok(InitOutcome::Overwritten)
    } else {
        Ok(InitOutcome::Skipped)
    }
}
