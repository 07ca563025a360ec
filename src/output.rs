//! Output formatters (human and JSONL)

pub mod human;
pub mod jsonl;
pub mod rule_list;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
pub use rule_list::{RuleListHumanFormatter, RuleListJsonlFormatter, RuleListing, RuleState};
