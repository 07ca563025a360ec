#![forbid(unsafe_code)]

//! Rule definitions and registry

mod builtin;
mod indent;
mod registry;
mod rule;
mod style_disabled;
mod tagname_lowercase;

// Re-export core types
pub use builtin::builtin_rules;
pub use indent::{IndentCheck, IndentMode, IndentRule};
pub use registry::RuleRegistry;
pub use rule::{Rule, RuleOptions};
pub use style_disabled::StyleDisabledRule;
pub use tagname_lowercase::TagnameLowercaseRule;
