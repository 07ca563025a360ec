#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! ```text
//! site/index.html:1:1: warning: use only tabs for indentation. [indent]
//!     <p>hello</p>
//!
//! Found 1 diagnostic in 1 file (2 files checked).
//! ```

use crate::engine::ExecutionResult;
use crate::reporter::Diagnostic;
use crate::types::Severity;
use std::io;
use std::path::Path;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Longest evidence excerpt shown under a diagnostic, in characters
const MAX_EVIDENCE_CHARS: usize = 80;

/// Human-readable formatter
pub struct HumanFormatter {
    use_color: bool,
}

impl HumanFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Format the execution result as a string
    pub fn format(&self, result: &ExecutionResult) -> io::Result<String> {
        let mut buffer = if self.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        self.write_to(&mut buffer, result)?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }

    /// Write the execution result to a color-capable writer
    pub fn write_to(&self, out: &mut impl WriteColor, result: &ExecutionResult) -> io::Result<()> {
        for (path, diagnostic) in result.iter_diagnostics() {
            write_diagnostic(out, path, diagnostic)?;
        }

        let total = result.total_diagnostics();
        if total > 0 {
            writeln!(out)?;
        }
        write_summary(out, result, total)
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

fn write_diagnostic(
    out: &mut impl WriteColor,
    path: &Path,
    diagnostic: &Diagnostic,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(
        out,
        "{}:{}:{}:",
        path.display(),
        diagnostic.line,
        diagnostic.col
    )?;
    out.reset()?;
    write!(out, " ")?;

    out.set_color(
        ColorSpec::new()
            .set_fg(Some(severity_color(diagnostic.severity)))
            .set_bold(true),
    )?;
    write!(out, "{}", diagnostic.severity)?;
    out.reset()?;

    write!(out, ": {} ", diagnostic.message)?;
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    write!(out, "[{}]", diagnostic.rule.id)?;
    out.reset()?;
    writeln!(out)?;

    if let Some(excerpt) = evidence_excerpt(&diagnostic.evidence) {
        writeln!(out, "    {}", excerpt)?;
    }
    Ok(())
}

fn write_summary(
    out: &mut impl WriteColor,
    result: &ExecutionResult,
    total: usize,
) -> io::Result<()> {
    let checked = plural(result.files_checked, "file", "files");
    if total == 0 {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "No problems found")?;
        out.reset()?;
        writeln!(out, " ({} checked).", checked)?;
    } else {
        let files_with_diagnostics = result
            .files
            .iter()
            .filter(|file| !file.diagnostics.is_empty())
            .count();
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(
            out,
            "Found {} in {}",
            plural(total, "diagnostic", "diagnostics"),
            plural(files_with_diagnostics, "file", "files")
        )?;
        out.reset()?;
        writeln!(out, " ({} checked).", checked)?;
    }

    if result.files_unreadable > 0 {
        writeln!(
            out,
            "{} could not be read.",
            plural(result.files_unreadable, "file", "files")
        )?;
    }
    Ok(())
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

/// First non-blank line of the evidence, trimmed and shortened
fn evidence_excerpt(evidence: &str) -> Option<String> {
    let line = evidence.lines().map(str::trim).find(|line| !line.is_empty())?;
    if line.chars().count() <= MAX_EVIDENCE_CHARS {
        return Some(line.to_string());
    }
    let mut excerpt: String = line.chars().take(MAX_EVIDENCE_CHARS).collect();
    excerpt.push_str("...");
    Some(excerpt)
}
