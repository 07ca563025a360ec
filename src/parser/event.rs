#![forbid(unsafe_code)]

//! Structural events emitted by the tokenizer

use std::fmt;

/// Kinds of structural units the parser recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Beginning of the input, emitted once before anything else
    Start,
    /// Opening tag such as `<div class="a">`
    TagStart,
    /// Closing tag such as `</div>`
    TagEnd,
    /// Run of character data between markup
    Text,
    /// `<!-- ... -->`
    Comment,
    /// Raw content of a `<script>` or `<style>` element
    Cdata,
    /// `<!DOCTYPE ...>` and other `<!...>` / `<?...>` declarations
    Doctype,
    /// End of the input, emitted once after everything else
    End,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Start => "start",
            EventKind::TagStart => "tagstart",
            EventKind::TagEnd => "tagend",
            EventKind::Text => "text",
            EventKind::Comment => "comment",
            EventKind::Cdata => "cdata",
            EventKind::Doctype => "doctype",
            EventKind::End => "end",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recognized unit of input
///
/// `raw` borrows the exact source slice; `line` and `col` are the 1-indexed
/// position of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event<'a> {
    pub kind: EventKind,
    pub raw: &'a str,
    pub line: u32,
    pub col: u32,
    /// Element name for `TagStart` and `TagEnd`, as written in the source
    pub tag_name: Option<&'a str>,
}

impl<'a> Event<'a> {
    /// Creates an event without a tag name
    pub fn new(kind: EventKind, raw: &'a str, line: u32, col: u32) -> Self {
        Self {
            kind,
            raw,
            line,
            col,
            tag_name: None,
        }
    }

    /// Creates a `Text` event
    pub fn text(raw: &'a str, line: u32, col: u32) -> Self {
        Self::new(EventKind::Text, raw, line, col)
    }

    /// Attaches a tag name
    pub fn with_tag_name(mut self, tag_name: &'a str) -> Self {
        self.tag_name = Some(tag_name);
        self
    }
}
