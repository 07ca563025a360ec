#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. One diagnostic record per diagnostic, in file order then report order
//! 2. One summary record

use crate::engine::ExecutionResult;
use serde::Serialize;
use std::path::Path;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the execution result as JSONL
    pub fn format(&self, result: &ExecutionResult) -> String {
        let mut output = String::new();

        for (path, diagnostic) in result.iter_diagnostics() {
            let record = DiagnosticRecord {
                record_type: "diagnostic",
                rule: diagnostic.rule.id.as_str(),
                severity: diagnostic.severity.as_str(),
                file: path,
                line: diagnostic.line,
                column: diagnostic.col,
                message: &diagnostic.message,
                evidence: &diagnostic.evidence,
            };
            push_line(&mut output, &record);
        }

        let total_diagnostics = result.total_diagnostics() as u64;
        let summary = SummaryRecord {
            record_type: "summary",
            passed: total_diagnostics == 0,
            files_checked: result.files_checked as u64,
            files_unreadable: result.files_unreadable as u64,
            total_diagnostics,
        };
        push_line(&mut output, &summary);

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line(output: &mut String, record: &impl Serialize) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Diagnostic record for JSONL output
#[derive(Debug, Serialize)]
struct DiagnosticRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    rule: &'a str,
    severity: &'static str,
    file: &'a Path,
    line: u32,
    column: u32,
    message: &'a str,
    evidence: &'a str,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    files_checked: u64,
    files_unreadable: u64,
    total_diagnostics: u64,
}
