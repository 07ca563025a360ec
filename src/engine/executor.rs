#![forbid(unsafe_code)]

//! Parallel execution engine for linting files
//!
//! This module provides the ExecutionEngine which runs an activated
//! `Linter` over discovered files in parallel using rayon.

use crate::engine::file_walker::FileEntry;
use crate::engine::linter::{ActivationError, Linter};
use crate::reporter::Diagnostic;
use crate::types::RuleId;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Diagnostics produced for a single file
#[derive(Debug, Clone, PartialEq)]
pub struct FileResult {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of linting all files
#[derive(Debug)]
pub struct ExecutionResult {
    /// Per-file results, in the order the files were given
    pub files: Vec<FileResult>,
    /// Number of files read and linted
    pub files_checked: usize,
    /// Number of files that could not be read
    pub files_unreadable: usize,
}

impl ExecutionResult {
    /// Total number of diagnostics across all files
    pub fn total_diagnostics(&self) -> usize {
        self.files.iter().map(|file| file.diagnostics.len()).sum()
    }

    /// Iterates over every diagnostic with the path it belongs to
    pub fn iter_diagnostics(&self) -> impl Iterator<Item = (&PathBuf, &Diagnostic)> {
        self.files.iter().flat_map(|file| {
            file.diagnostics
                .iter()
                .map(move |diagnostic| (&file.path, diagnostic))
        })
    }
}

/// Execution engine that lints files in parallel
///
/// The linter is activated once up front and shared read-only between
/// worker threads; each file gets its own reporter.
pub struct ExecutionEngine<'r> {
    linter: Linter<'r>,
}

impl<'r> ExecutionEngine<'r> {
    pub fn new(linter: Linter<'r>) -> Self {
        Self { linter }
    }

    /// IDs of the rules that will run
    pub fn active_rules(&self) -> &[RuleId] {
        self.linter.active_rules()
    }

    /// Rules that were selected but could not be activated
    pub fn activation_errors(&self) -> &[ActivationError] {
        self.linter.activation_errors()
    }

    /// Lint the discovered files
    ///
    /// Unreadable files are logged and skipped. The returned per-file
    /// results keep the order of `files`.
    pub fn execute(&self, files: Vec<FileEntry>) -> ExecutionResult {
        let results: Vec<Option<FileResult>> = files
            .par_iter()
            .map(|file| self.execute_file(file))
            .collect();

        let files_unreadable = results.iter().filter(|result| result.is_none()).count();
        let files: Vec<FileResult> = results.into_iter().flatten().collect();

        ExecutionResult {
            files_checked: files.len(),
            files_unreadable,
            files,
        }
    }

    /// Lint a single file, or `None` if it can't be read
    fn execute_file(&self, file: &FileEntry) -> Option<FileResult> {
        let content = match fs::read_to_string(&file.path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to read file {}: {}", file.path.display(), e);
                return None;
            }
        };

        let diagnostics = self.linter.lint(&content);
        log::debug!(
            "{}: {} diagnostic(s)",
            file.path.display(),
            diagnostics.len()
        );

        Some(FileResult {
            path: file.path.clone(),
            diagnostics,
        })
    }
}
