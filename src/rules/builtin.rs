#![forbid(unsafe_code)]

//! Built-in rules compiled into the binary

use crate::rules::{IndentRule, Rule, StyleDisabledRule, TagnameLowercaseRule};

/// Returns a fresh instance of every built-in rule
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(IndentRule::new()),
        Box::new(StyleDisabledRule::new()),
        Box::new(TagnameLowercaseRule::new()),
    ]
}
