#![forbid(unsafe_code)]

//! Rule listing output formatters
//!
//! This module provides formatters for the `marklint list` command. It
//! supports both human-readable and JSONL output formats.

use serde::Serialize;

/// How a rule is set up in the loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleState {
    /// Not listed in `[rules]`
    Unconfigured,
    /// Listed as `false`
    Disabled,
    /// Listed with options, rendered for display
    Enabled(String),
}

impl RuleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleState::Unconfigured => "unconfigured",
            RuleState::Disabled => "disabled",
            RuleState::Enabled(_) => "enabled",
        }
    }

    fn options(&self) -> Option<&str> {
        match self {
            RuleState::Enabled(options) => Some(options),
            _ => None,
        }
    }
}

/// Listing information for a single rule
#[derive(Debug, Clone)]
pub struct RuleListing {
    pub rule_id: String,
    pub description: String,
    pub accepted_options: String,
    pub state: RuleState,
}

/// Human-readable formatter for rule listings
pub struct RuleListHumanFormatter;

impl RuleListHumanFormatter {
    pub fn new() -> Self {
        RuleListHumanFormatter
    }

    /// Format a list of rules for human consumption
    pub fn format(&self, rules: &[RuleListing]) -> String {
        let mut output = String::new();

        let enabled = rules
            .iter()
            .filter(|rule| matches!(rule.state, RuleState::Enabled(_)))
            .count();
        output.push_str(&format!(
            "Rules ({} available, {} enabled):\n",
            rules.len(),
            enabled
        ));
        output.push('\n');

        for rule in rules {
            output.push_str(&format!("{}\n", rule.rule_id));
            output.push_str(&format!("  Description: {}\n", rule.description));
            output.push_str(&format!("  Options: {}\n", rule.accepted_options));
            match &rule.state {
                RuleState::Enabled(options) => {
                    output.push_str(&format!("  Status: enabled ({})\n", options));
                }
                state => output.push_str(&format!("  Status: {}\n", state.as_str())),
            }
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rules: &[RuleListing]) {
        print!("{}", self.format(rules));
    }
}

impl Default for RuleListHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for a rule listing
#[derive(Debug, Serialize)]
struct JsonlRuleListing<'a> {
    rule_id: &'a str,
    description: &'a str,
    accepted_options: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a str>,
}

/// JSONL formatter for rule listings
pub struct RuleListJsonlFormatter;

impl RuleListJsonlFormatter {
    pub fn new() -> Self {
        RuleListJsonlFormatter
    }

    /// Format a list of rules as JSONL, one object per rule
    pub fn format(&self, rules: &[RuleListing]) -> String {
        let mut output = String::new();

        for rule in rules {
            let record = JsonlRuleListing {
                rule_id: &rule.rule_id,
                description: &rule.description,
                accepted_options: &rule.accepted_options,
                status: rule.state.as_str(),
                options: rule.state.options(),
            };

            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rules: &[RuleListing]) {
        print!("{}", self.format(rules));
    }
}

impl Default for RuleListJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
