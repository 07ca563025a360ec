#![forbid(unsafe_code)]

//! Core Rule trait and rule options

use crate::error::RuleError;
use crate::parser::Subscriber;
use crate::types::RuleId;
use serde::{Deserialize, Serialize};

/// Options a rule is activated with, as written in `marklint.toml`
///
/// ```toml
/// [rules]
/// tagname-lowercase = true
/// indent = "space"
/// # indent = { pattern = "\t +", message = "no tab-space mix" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleOptions {
    /// Plain on/off switch
    Enabled(bool),
    /// Symbolic mode selector
    Mode(String),
    /// Caller-supplied pattern and message
    Custom { pattern: String, message: String },
}

impl RuleOptions {
    /// Returns false only for an explicit `false`
    pub fn is_enabled(&self) -> bool {
        !matches!(self, RuleOptions::Enabled(false))
    }

    /// Checks that a switch-only rule was given `true`
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidOptions` for any other shape.
    pub fn expect_switch(&self, rule: &RuleId) -> Result<(), RuleError> {
        match self {
            RuleOptions::Enabled(true) => Ok(()),
            other => Err(RuleError::InvalidOptions {
                rule: rule.to_string(),
                message: format!("expected `true`, got {}", other.describe()),
            }),
        }
    }

    /// Short rendering of the options for error messages
    pub fn describe(&self) -> String {
        match self {
            RuleOptions::Enabled(value) => value.to_string(),
            RuleOptions::Mode(mode) => format!("\"{}\"", mode),
            RuleOptions::Custom { pattern, .. } => format!("{{ pattern = {:?}, .. }}", pattern),
        }
    }
}

/// Trait that all rules must implement
///
/// A rule does no work until `init` subscribes it to parser events. `init`
/// resolves the options once; the listeners it registers must only read that
/// resolved state, so the same activation can serve many inputs.
///
/// The trait is `Send + Sync` so an activated parser can be shared across
/// threads.
pub trait Rule: Send + Sync {
    /// Returns the unique identifier for this rule
    fn id(&self) -> &RuleId;

    /// Returns a human-readable description of what this rule checks
    fn description(&self) -> &str;

    /// Returns a short description of the accepted options
    fn options_hint(&self) -> &str;

    /// Resolves `options` and subscribes to parser events
    ///
    /// # Errors
    ///
    /// Returns `RuleError` when the options are not accepted. Nothing the rule
    /// registered is kept in that case.
    fn init(&self, parser: &mut Subscriber<'_>, options: &RuleOptions) -> Result<(), RuleError>;
}
