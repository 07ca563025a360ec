#![forbid(unsafe_code)]

//! Event dispatch from the tokenizer to rule listeners

use super::event::{Event, EventKind};
use super::tokenizer::Tokenizer;
use crate::error::RuleError;
use crate::reporter::Reporter;
use crate::rules::{Rule, RuleOptions};
use std::collections::HashMap;

/// Callback a rule registers for one event kind
///
/// The listener receives the rule that registered it, so rules never need to
/// capture a reference to themselves. Listeners are `Send + Sync` so an
/// activated parser can be shared across threads linting different files.
pub type Listener<'r> = Box<dyn Fn(&Event<'_>, &dyn Rule, &mut Reporter) + Send + Sync + 'r>;

struct Subscription<'r> {
    rule: &'r dyn Rule,
    listener: Listener<'r>,
}

/// Collects the listeners a single rule registers during `init`
///
/// Listeners are only attached to the parser once `init` returns `Ok`, so a
/// rule that fails half-way through activation leaves nothing behind.
pub struct Subscriber<'r> {
    pending: Vec<(EventKind, Listener<'r>)>,
}

impl<'r> Subscriber<'r> {
    fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Subscribes to every event of the given kind
    pub fn add_listener<F>(&mut self, kind: EventKind, listener: F)
    where
        F: Fn(&Event<'_>, &dyn Rule, &mut Reporter) + Send + Sync + 'r,
    {
        self.pending.push((kind, Box::new(listener)));
    }
}

/// Markup parser that streams events to subscribed rules
pub struct HtmlParser<'r> {
    listeners: HashMap<EventKind, Vec<Subscription<'r>>>,
}

impl<'r> HtmlParser<'r> {
    /// Creates a parser with no listeners
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    /// Runs a rule's `init` hook and attaches the listeners it registered
    ///
    /// # Errors
    ///
    /// Returns the rule's `RuleError` unchanged; no listener of that rule is
    /// attached in that case.
    pub fn activate(
        &mut self,
        rule: &'r dyn Rule,
        options: &RuleOptions,
    ) -> Result<(), RuleError> {
        let mut subscriber = Subscriber::new();
        rule.init(&mut subscriber, options)?;

        for (kind, listener) in subscriber.pending {
            self.listeners
                .entry(kind)
                .or_default()
                .push(Subscription { rule, listener });
        }
        Ok(())
    }

    /// Total number of attached listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Streams `input` once, dispatching every event to its listeners
    ///
    /// Each listener runs to completion before the next listener or event.
    pub fn parse(&self, input: &str, reporter: &mut Reporter) {
        self.fire(&Event::new(EventKind::Start, "", 1, 1), reporter);

        let mut tokenizer = Tokenizer::new(input);
        for event in tokenizer.by_ref() {
            self.fire(&event, reporter);
        }

        let (line, col) = tokenizer.position();
        self.fire(&Event::new(EventKind::End, "", line, col), reporter);
    }

    /// Dispatches a single event to the listeners subscribed to its kind
    pub fn fire(&self, event: &Event<'_>, reporter: &mut Reporter) {
        let Some(subscriptions) = self.listeners.get(&event.kind) else {
            return;
        };
        for subscription in subscriptions {
            (subscription.listener)(event, subscription.rule, reporter);
        }
    }
}

impl Default for HtmlParser<'_> {
    fn default() -> Self {
        Self::new()
    }
}
