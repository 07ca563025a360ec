#![forbid(unsafe_code)]

//! Markup tokenizer and event dispatch

mod event;
mod html_parser;
mod tokenizer;

pub use event::{Event, EventKind};
pub use html_parser::{HtmlParser, Listener, Subscriber};
pub use tokenizer::Tokenizer;
