#![forbid(unsafe_code)]

//! Rule forbidding `<style>` elements

use crate::error::RuleError;
use crate::parser::{EventKind, Subscriber};
use crate::rules::{Rule, RuleOptions};
use crate::types::RuleId;

/// The `style-disabled` rule
#[derive(Debug)]
pub struct StyleDisabledRule {
    id: RuleId,
}

impl StyleDisabledRule {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin("style-disabled"),
        }
    }
}

impl Default for StyleDisabledRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for StyleDisabledRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "<style> tags cannot be used."
    }

    fn options_hint(&self) -> &str {
        "true"
    }

    fn init(&self, parser: &mut Subscriber<'_>, options: &RuleOptions) -> Result<(), RuleError> {
        options.expect_switch(&self.id)?;
        parser.add_listener(EventKind::TagStart, |event, rule, reporter| {
            if event
                .tag_name
                .is_some_and(|name| name.eq_ignore_ascii_case("style"))
            {
                reporter.warn(
                    "The <style> tag cannot be used.",
                    event.line,
                    event.col,
                    rule,
                    event.raw,
                );
            }
        });
        Ok(())
    }
}
