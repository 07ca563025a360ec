#![forbid(unsafe_code)]

//! Diagnostic collection for a single lint pass
//!
//! The Reporter is the sink rules write into. It never validates what it is
//! given: positions and messages are stored exactly as the rule passed them,
//! in the order they were reported.

use crate::rules::Rule;
use crate::types::{RuleId, Severity};

/// Identity of the rule that produced a diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRef {
    pub id: RuleId,
    pub description: String,
}

impl RuleRef {
    /// Captures the identity of a rule
    pub fn of(rule: &dyn Rule) -> Self {
        Self {
            id: rule.id().clone(),
            description: rule.description().to_string(),
        }
    }
}

/// A single positioned finding reported by a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity chosen by the reporting call
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Line number (1-indexed, as reported by the rule)
    pub line: u32,

    /// Column number (1-indexed, as reported by the rule)
    pub col: u32,

    /// Rule that reported this diagnostic
    pub rule: RuleRef,

    /// Raw source text the rule was looking at
    pub evidence: String,
}

/// Accumulates diagnostics for one lint pass
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    /// Creates an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a warning
    pub fn warn(&mut self, message: &str, line: u32, col: u32, rule: &dyn Rule, evidence: &str) {
        self.report(Severity::Warning, message, line, col, rule, evidence);
    }

    /// Reports an error
    pub fn error(&mut self, message: &str, line: u32, col: u32, rule: &dyn Rule, evidence: &str) {
        self.report(Severity::Error, message, line, col, rule, evidence);
    }

    /// Reports an informational finding
    pub fn info(&mut self, message: &str, line: u32, col: u32, rule: &dyn Rule, evidence: &str) {
        self.report(Severity::Info, message, line, col, rule, evidence);
    }

    fn report(
        &mut self,
        severity: Severity,
        message: &str,
        line: u32,
        col: u32,
        rule: &dyn Rule,
        evidence: &str,
    ) {
        self.diagnostics.push(Diagnostic {
            severity,
            message: message.to_string(),
            line,
            col,
            rule: RuleRef::of(rule),
            evidence: evidence.to_string(),
        });
    }

    /// Diagnostics reported so far, in detection order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of diagnostics reported so far
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the reporter, yielding the final diagnostic list
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
