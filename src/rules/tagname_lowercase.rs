#![forbid(unsafe_code)]

//! Lowercase element name rule

use crate::error::RuleError;
use crate::parser::{Event, EventKind, Subscriber};
use crate::reporter::Reporter;
use crate::rules::{Rule, RuleOptions};
use crate::types::RuleId;

/// The `tagname-lowercase` rule
///
/// Checks opening and closing tags; each offending tag is reported at its
/// own position.
#[derive(Debug)]
pub struct TagnameLowercaseRule {
    id: RuleId,
}

impl TagnameLowercaseRule {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin("tagname-lowercase"),
        }
    }
}

impl Default for TagnameLowercaseRule {
    fn default() -> Self {
        Self::new()
    }
}

fn check_tag_name(event: &Event<'_>, rule: &dyn Rule, reporter: &mut Reporter) {
    if let Some(name) = event.tag_name
        && name.chars().any(|c| c.is_ascii_uppercase())
    {
        reporter.warn(
            &format!("The html element name of [ {} ] must be in lowercase.", name),
            event.line,
            event.col,
            rule,
            event.raw,
        );
    }
}

impl Rule for TagnameLowercaseRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Tag names must be lowercase."
    }

    fn options_hint(&self) -> &str {
        "true"
    }

    fn init(&self, parser: &mut Subscriber<'_>, options: &RuleOptions) -> Result<(), RuleError> {
        options.expect_switch(&self.id)?;
        parser.add_listener(EventKind::TagStart, check_tag_name);
        parser.add_listener(EventKind::TagEnd, check_tag_name);
        Ok(())
    }
}
