#![forbid(unsafe_code)]

//! Lightweight markup tokenizer
//!
//! Splits input into tags, comments, declarations and text runs. It does not
//! build a tree or check nesting; it only finds the boundaries of each unit
//! and tracks where it starts.

use super::event::{Event, EventKind};

/// Elements whose content is not markup
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Boundaries of one markup unit starting at a `<`
#[derive(Debug)]
struct Markup<'a> {
    end: usize,
    kind: EventKind,
    tag_name: Option<&'a str>,
    self_closing: bool,
}

/// Iterator over the structural events of an input
///
/// `Start` and `End` are not produced here; the parser wraps them around the
/// tokenizer output.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    col: u32,
    raw_text_tag: Option<&'static str>,
    /// Offset of the last `>`; no tag can open after it
    last_close: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
            raw_text_tag: None,
            last_close: input.rfind('>'),
        }
    }

    /// Current line and column (1-indexed)
    pub fn position(&self) -> (u32, u32) {
        (self.line, self.col)
    }

    fn emit(&mut self, kind: EventKind, end: usize, tag_name: Option<&'a str>) -> Event<'a> {
        let mut event = Event::new(kind, &self.input[self.pos..end], self.line, self.col);
        event.tag_name = tag_name;
        self.advance(end);
        event
    }

    fn advance(&mut self, end: usize) {
        for c in self.input[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.pos = end;
    }

    /// Offset of the close tag ending a raw text element, or end of input
    fn raw_text_end(&self, tag: &str) -> usize {
        let needle = format!("</{}", tag);
        find_ignore_ascii_case(&self.input[self.pos..], &needle)
            .map_or(self.input.len(), |offset| self.pos + offset)
    }

    /// Offset of the first `<` at or after `from` that opens markup
    fn next_markup_start(&self, from: usize) -> usize {
        let mut search = from;
        while let Some(offset) = self.input[search..].find('<') {
            let candidate = search + offset;
            if self.last_close.is_none_or(|close| candidate > close) {
                // Only a comment can still open here
                return self.input[candidate..]
                    .find("<!--")
                    .map_or(self.input.len(), |offset| candidate + offset);
            }
            if self.scan_markup(candidate).is_some() {
                return candidate;
            }
            search = candidate + 1;
        }
        self.input.len()
    }

    /// Recognizes the markup unit opened by the `<` at `start`
    ///
    /// Returns None when the `<` is plain text (`a < b`) or the tag is never
    /// closed.
    fn scan_markup(&self, start: usize) -> Option<Markup<'a>> {
        let input: &'a str = self.input;
        let rest = &input[start..];
        let bytes = rest.as_bytes();

        if rest.starts_with("<!--") {
            // `<!-->` and `<!--->` close immediately
            let end = rest[2..]
                .find("-->")
                .map_or(input.len(), |offset| start + 2 + offset + 3);
            return Some(Markup {
                end,
                kind: EventKind::Comment,
                tag_name: None,
                self_closing: false,
            });
        }

        match bytes.get(1) {
            Some(b'!') | Some(b'?') => {
                let close = rest.find('>')?;
                Some(Markup {
                    end: start + close + 1,
                    kind: EventKind::Doctype,
                    tag_name: None,
                    self_closing: false,
                })
            }
            Some(b'/') => {
                if !bytes.get(2).is_some_and(u8::is_ascii_alphabetic) {
                    return None;
                }
                let name_end = 2 + name_len(&rest[2..]);
                let close = rest.find('>')?;
                Some(Markup {
                    end: start + close + 1,
                    kind: EventKind::TagEnd,
                    tag_name: Some(&input[start + 2..start + name_end]),
                    self_closing: false,
                })
            }
            Some(b) if b.is_ascii_alphabetic() => {
                let name_end = 1 + name_len(&rest[1..]);
                let close = find_tag_close(rest, name_end)?;
                Some(Markup {
                    end: start + close + 1,
                    kind: EventKind::TagStart,
                    tag_name: Some(&input[start + 1..start + name_end]),
                    self_closing: rest[..close].trim_end().ends_with('/'),
                })
            }
            _ => None,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Event<'a>> {
        if self.pos >= self.input.len() {
            return None;
        }

        if let Some(tag) = self.raw_text_tag.take() {
            let end = self.raw_text_end(tag);
            if end > self.pos {
                return Some(self.emit(EventKind::Cdata, end, None));
            }
        }

        if self.input[self.pos..].starts_with('<')
            && let Some(markup) = self.scan_markup(self.pos)
        {
            if markup.kind == EventKind::TagStart
                && !markup.self_closing
                && let Some(name) = markup.tag_name
            {
                self.raw_text_tag = RAW_TEXT_ELEMENTS
                    .iter()
                    .copied()
                    .find(|element| element.eq_ignore_ascii_case(name));
            }
            return Some(self.emit(markup.kind, markup.end, markup.tag_name));
        }

        let first_len = self.input[self.pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let end = self.next_markup_start(self.pos + first_len);
        Some(self.emit(EventKind::Text, end, None))
    }
}

/// Length of the element name at the start of `s`
fn name_len(s: &str) -> usize {
    s.find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(s.len())
}

/// Byte offset of the first ASCII case-insensitive match of `needle`
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// Offset of the `>` closing an opening tag, skipping quoted attribute values
fn find_tag_close(tag: &str, from: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (offset, c) in tag[from..].char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return Some(from + offset),
            None => {}
        }
    }
    None
}
