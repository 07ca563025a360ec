//! Error types for marklint
//!
//! Configuration errors come from loading `marklint.toml`; rule errors come
//! from activating a rule with its options. Finding a violation is never an
//! error: violations are reported as diagnostics.

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Options do not have a shape the rule accepts
    #[error("Invalid options for rule '{rule}': {message}")]
    InvalidOptions { rule: String, message: String },

    /// Rule not found
    #[error("Rule not found: {0}")]
    NotFound(String),

    /// Two rules registered under the same ID
    #[error("Duplicate rule ID: {0}")]
    Duplicate(String),

    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),
}

/// Top-level error type for marklint
#[derive(Debug, thiserror::Error)]
pub enum MarklintError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
