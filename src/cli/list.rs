//! List command implementation
//!
//! This module implements the `marklint list` command, which lists every
//! built-in rule with its description, the options it accepts and, when a
//! configuration is available, how it is configured.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use crate::config::{CONFIG_FILE_NAME, Config, RulesConfig};
use crate::error::ConfigError;
use crate::output::{RuleListHumanFormatter, RuleListJsonlFormatter, RuleListing, RuleState};
use crate::rules::{Rule, RuleRegistry};
use std::path::Path;

/// Run the list command
///
/// Without `--config`, `./marklint.toml` is used if it exists; otherwise
/// every rule is listed as unconfigured.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
/// - 3: Parse error (invalid TOML configuration)
pub fn run_list(format: OutputFormat, config_path: Option<&Path>) -> i32 {
    let config = match load_optional_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Configuration error: {}", e);
            return match e {
                ConfigError::Parse(_) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            };
        }
    };

    let registry = RuleRegistry::with_builtin_rules();
    let rules = config.map(|config| config.rules).unwrap_or_default();
    let listings = build_listings(&registry, &rules);

    match format {
        OutputFormat::Human => RuleListHumanFormatter::new().write_to_stdout(&listings),
        OutputFormat::Jsonl => RuleListJsonlFormatter::new().write_to_stdout(&listings),
    }

    EXIT_SUCCESS
}

fn load_optional_config(config_path: Option<&Path>) -> Result<Option<Config>, ConfigError> {
    match config_path {
        Some(path) => Config::load(path).map(Some),
        None if Path::new(CONFIG_FILE_NAME).exists() => Config::load(CONFIG_FILE_NAME).map(Some),
        None => Ok(None),
    }
}

/// Describes every registered rule, in rule ID order
fn build_listings(registry: &RuleRegistry, rules: &RulesConfig) -> Vec<RuleListing> {
    registry
        .iter_rules()
        .map(|rule: &dyn Rule| {
            let state = match rules.get(rule.id()) {
                None => RuleState::Unconfigured,
                Some(options) if !options.is_enabled() => RuleState::Disabled,
                Some(options) => RuleState::Enabled(options.describe()),
            };

            RuleListing {
                rule_id: rule.id().to_string(),
                description: rule.description().to_string(),
                accepted_options: rule.options_hint().to_string(),
                state,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleOptions;
    use crate::types::RuleId;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_listings_without_config() {
        let registry = RuleRegistry::with_builtin_rules();
        let listings = build_listings(&registry, &RulesConfig::new());

        let ids: Vec<&str> = listings.iter().map(|l| l.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["indent", "style-disabled", "tagname-lowercase"]);
        assert!(listings.iter().all(|l| l.state == RuleState::Unconfigured));
        assert_eq!(
            listings[0].description,
            "Do not mix tabs and spaces for indentation."
        );
    }

    #[test]
    fn test_build_listings_reflects_config() {
        let registry = RuleRegistry::with_builtin_rules();
        let mut rules = RulesConfig::new();
        rules.insert(
            RuleId::new("indent").unwrap(),
            RuleOptions::Mode("tab".to_string()),
        );
        rules.insert(
            RuleId::new("style-disabled").unwrap(),
            RuleOptions::Enabled(false),
        );

        let listings = build_listings(&registry, &rules);

        assert_eq!(listings[0].state, RuleState::Enabled("\"tab\"".to_string()));
        assert_eq!(listings[1].state, RuleState::Disabled);
        assert_eq!(listings[2].state, RuleState::Unconfigured);
    }

    #[test]
    fn test_load_optional_config_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("marklint.toml");
        fs::write(&path, "[marklint]\nversion = \"1\"\n[rules]\nindent = \"space\"\n").unwrap();

        let config = load_optional_config(Some(&path)).unwrap();
        assert_eq!(config.map(|c| c.rules.len()), Some(1));
    }

    #[test]
    fn test_run_list_with_broken_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("marklint.toml");
        fs::write(&path, "[marklint\n").unwrap();

        assert_eq!(run_list(OutputFormat::Jsonl, Some(&path)), EXIT_PARSE_ERROR);
    }
}
