#![forbid(unsafe_code)]

//! Marklint: an event-driven linter for HTML markup
//!
//! A tokenizer streams structural events over the input; rules subscribe to
//! the events they care about and write positioned diagnostics into a
//! reporter.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod reporter;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, MarklintError, RuleError};

// Re-export core domain types for convenient access
pub use engine::Linter;
pub use reporter::{Diagnostic, Reporter};
pub use types::{GlobPattern, RuleId, Severity};
