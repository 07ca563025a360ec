#![forbid(unsafe_code)]

//! Rule registry for managing rules by ID
//!
//! The RuleRegistry owns every known rule for the lifetime of the process.
//! A lint run looks rules up here by ID to decide which ones to activate.

use crate::error::RuleError;
use crate::rules::{Rule, builtin_rules};
use crate::types::RuleId;
use std::collections::HashMap;

/// Registry for storing and managing all rules
///
/// Rules are stored as trait objects, keyed by their unique RuleId.
pub struct RuleRegistry {
    rules: HashMap<RuleId, Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in rule
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        for rule in builtin_rules() {
            registry.rules.insert(rule.id().clone(), rule);
        }
        registry
    }

    /// Register a rule
    ///
    /// # Errors
    ///
    /// Returns `RuleError::Duplicate` if a rule with the same ID is already
    /// registered; the existing rule is kept.
    pub fn register(&mut self, rule: Box<dyn Rule>) -> Result<(), RuleError> {
        let rule_id = rule.id().clone();
        if self.rules.contains_key(&rule_id) {
            return Err(RuleError::Duplicate(rule_id.to_string()));
        }
        self.rules.insert(rule_id, rule);
        Ok(())
    }

    /// Get a rule by its ID
    ///
    /// Returns `None` if the rule is not found in the registry.
    pub fn get_rule(&self, id: &RuleId) -> Option<&dyn Rule> {
        self.rules.get(id).map(|boxed| boxed.as_ref())
    }

    /// Iterate over all rules in the registry, ordered by ID
    pub fn iter_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        let mut rules: Vec<&dyn Rule> = self.rules.values().map(|boxed| boxed.as_ref()).collect();
        rules.sort_by(|a, b| a.id().cmp(b.id()));
        rules.into_iter()
    }

    /// Get the number of rules in the registry
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtin_rules()
    }
}
