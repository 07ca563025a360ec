#![forbid(unsafe_code)]

//! Indentation consistency rule
//!
//! Flags text that contains the indentation character the configured mode
//! forbids: runs of spaces under `"tab"`, runs of tabs under `"space"`, or
//! whatever a custom `{ pattern, message }` describes.
//!
//! The search is a single unanchored find over the whole text fragment, and
//! a hit is always reported at line 1, column 1 of the file with the full
//! fragment as evidence. At most one diagnostic is produced per text event.

use crate::error::RuleError;
use crate::parser::{EventKind, Subscriber};
use crate::rules::{Rule, RuleOptions};
use crate::types::RuleId;
use regex::Regex;

const TAB_MODE_PATTERN: &str = " +";
const TAB_MODE_MESSAGE: &str = "use only tabs for indentation.";
const SPACE_MODE_PATTERN: &str = "\t+";
const SPACE_MODE_MESSAGE: &str = "use only spaces for indentation.";

/// Indentation policy selected by the rule options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndentMode {
    /// Tabs only; runs of spaces are violations
    Tab,
    /// Spaces only; runs of tabs are violations
    Space,
    /// Caller-defined forbidden pattern and message
    Custom { pattern: String, message: String },
}

impl IndentMode {
    /// Interprets rule options as an indentation mode
    ///
    /// Returns a description of the problem when the options are neither
    /// `"tab"`, `"space"`, nor a `{ pattern, message }` table.
    pub fn from_options(options: &RuleOptions) -> Result<Self, String> {
        match options {
            RuleOptions::Mode(mode) => match mode.as_str() {
                "tab" => Ok(IndentMode::Tab),
                "space" => Ok(IndentMode::Space),
                other => Err(format!(
                    "unknown mode \"{}\", expected \"tab\", \"space\" or {{ pattern, message }}",
                    other
                )),
            },
            RuleOptions::Custom { pattern, message } => Ok(IndentMode::Custom {
                pattern: pattern.clone(),
                message: message.clone(),
            }),
            RuleOptions::Enabled(_) => Err(format!(
                "expected \"tab\", \"space\" or {{ pattern, message }}, got {}",
                options.describe()
            )),
        }
    }

    /// Compiles the mode into the pattern and message used per event
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if a custom pattern does not compile.
    pub fn resolve(&self) -> Result<IndentCheck, RuleError> {
        let (pattern, message) = match self {
            IndentMode::Tab => (TAB_MODE_PATTERN, TAB_MODE_MESSAGE),
            IndentMode::Space => (SPACE_MODE_PATTERN, SPACE_MODE_MESSAGE),
            IndentMode::Custom { pattern, message } => (pattern.as_str(), message.as_str()),
        };

        let pattern = Regex::new(pattern).map_err(|e| {
            RuleError::InvalidRegex(format!("Failed to compile pattern '{}': {}", pattern, e))
        })?;

        Ok(IndentCheck {
            pattern,
            message: message.to_string(),
        })
    }
}

/// Resolved forbidden pattern and the message reported when it is found
#[derive(Debug, Clone)]
pub struct IndentCheck {
    pattern: Regex,
    message: String,
}

impl IndentCheck {
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if `raw` contains the forbidden pattern anywhere
    pub fn is_violated_by(&self, raw: &str) -> bool {
        self.pattern.find(raw).is_some()
    }
}

/// The `indent` rule
#[derive(Debug)]
pub struct IndentRule {
    id: RuleId,
}

impl IndentRule {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin("indent"),
        }
    }
}

impl Default for IndentRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for IndentRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Do not mix tabs and spaces for indentation."
    }

    fn options_hint(&self) -> &str {
        "\"tab\" | \"space\" | { pattern, message }"
    }

    fn init(&self, parser: &mut Subscriber<'_>, options: &RuleOptions) -> Result<(), RuleError> {
        let mode = IndentMode::from_options(options).map_err(|message| {
            RuleError::InvalidOptions {
                rule: self.id.to_string(),
                message,
            }
        })?;
        let check = mode.resolve()?;
        log::debug!(
            "indent: forbidding /{}/ ({:?})",
            check.pattern.as_str(),
            mode
        );

        parser.add_listener(EventKind::Text, move |event, rule, reporter| {
            if check.is_violated_by(event.raw) {
                reporter.warn(&check.message, 1, 1, rule, event.raw);
            }
        });
        Ok(())
    }
}
