#![forbid(unsafe_code)]

//! Activation of the selected rules and single-input lint passes

use crate::config::{Config, RulesConfig};
use crate::error::RuleError;
use crate::parser::HtmlParser;
use crate::reporter::{Diagnostic, Reporter};
use crate::rules::RuleRegistry;
use crate::types::RuleId;

/// A selected rule that could not be activated
#[derive(Debug, thiserror::Error)]
#[error("rule '{rule_id}' was not activated: {source}")]
pub struct ActivationError {
    pub rule_id: RuleId,
    #[source]
    pub source: RuleError,
}

/// A parser wired to the rules selected by a configuration
///
/// Activation happens once, in `new`. A rule whose activation fails is left
/// out and recorded in `activation_errors`; the remaining rules are
/// unaffected. After that the linter is read-only and can lint any number
/// of inputs, from any number of threads.
pub struct Linter<'r> {
    parser: HtmlParser<'r>,
    active_rules: Vec<RuleId>,
    activation_errors: Vec<ActivationError>,
}

impl<'r> Linter<'r> {
    /// Activates every enabled rule of `rules`, in rule ID order
    pub fn new(registry: &'r RuleRegistry, rules: &RulesConfig) -> Self {
        let mut parser = HtmlParser::new();
        let mut active_rules = Vec::new();
        let mut activation_errors = Vec::new();

        for (rule_id, options) in rules.iter().filter(|(_, options)| options.is_enabled()) {
            let result = match registry.get_rule(rule_id) {
                Some(rule) => parser.activate(rule, options),
                None => Err(RuleError::NotFound(rule_id.to_string())),
            };

            match result {
                Ok(()) => {
                    log::debug!("Activated rule {} with {}", rule_id, options.describe());
                    active_rules.push(rule_id.clone());
                }
                Err(source) => {
                    let error = ActivationError {
                        rule_id: rule_id.clone(),
                        source,
                    };
                    log::debug!("{}", error);
                    activation_errors.push(error);
                }
            }
        }

        Self {
            parser,
            active_rules,
            activation_errors,
        }
    }

    /// Activates the rules selected by a loaded configuration
    pub fn from_config(registry: &'r RuleRegistry, config: &Config) -> Self {
        Self::new(registry, &config.rules)
    }

    /// Runs one lint pass over `input` with a fresh reporter
    pub fn lint(&self, input: &str) -> Vec<Diagnostic> {
        let mut reporter = Reporter::new();
        self.parser.parse(input, &mut reporter);
        reporter.into_diagnostics()
    }

    /// IDs of the rules that were activated, in activation order
    pub fn active_rules(&self) -> &[RuleId] {
        &self.active_rules
    }

    /// Rules that were selected but failed to activate
    pub fn activation_errors(&self) -> &[ActivationError] {
        &self.activation_errors
    }
}
