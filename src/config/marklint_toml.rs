//! Parsing and validation for marklint.toml configuration files

use crate::error::ConfigError;
use crate::rules::RuleOptions;
use crate::types::{GlobPattern, RuleId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "marklint.toml";

/// Selected rules and their options, ordered by rule ID
pub type RulesConfig = BTreeMap<RuleId, RuleOptions>;

/// Main configuration struct for marklint.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Marklint metadata
    pub marklint: MarklintMeta,

    /// Rules to run, with their options
    #[serde(default)]
    pub rules: RulesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rules that are switched on, in activation order
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&RuleId, &RuleOptions)> {
        self.rules.iter().filter(|(_, options)| options.is_enabled())
    }

    /// Validate the configuration
    ///
    /// Rule options are not checked here: each rule validates its own
    /// options when it is activated.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.marklint.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.marklint.version
            )));
        }

        for pattern in &self.marklint.include {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid include glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        for pattern in &self.marklint.exclude {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid exclude glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marklint: MarklintMeta::default(),
            rules: RulesConfig::new(),
            output: OutputConfig::default(),
        }
    }
}

/// Marklint metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarklintMeta {
    /// Configuration version (must be "1")
    pub version: String,

    /// File patterns to include
    #[serde(default = "default_include")]
    pub include: Vec<GlobPattern>,

    /// File patterns to exclude
    #[serde(default)]
    pub exclude: Vec<GlobPattern>,
}

impl Default for MarklintMeta {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            include: default_include(),
            exclude: Vec::new(),
        }
    }
}

fn default_include() -> Vec<GlobPattern> {
    vec![GlobPattern::new("**/*.html"), GlobPattern::new("**/*.htm")]
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
