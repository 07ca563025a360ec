//! Test utilities for marklint integration tests

#![allow(dead_code)]

use marklint::config::RulesConfig;
use marklint::rules::RuleOptions;
use marklint::types::RuleId;
use std::fs;
use std::path::Path;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Builds a rules table from `(id, options)` pairs
pub fn rules(entries: &[(&str, RuleOptions)]) -> RulesConfig {
    entries
        .iter()
        .map(|(id, options)| (RuleId::new(*id).unwrap(), options.clone()))
        .collect()
}

/// Options selecting a named indentation mode
pub fn mode(value: &str) -> RuleOptions {
    RuleOptions::Mode(value.to_string())
}

/// Writes `content` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A small site: one clean page, one space-indented page, one tab-indented page
pub fn setup_site(root: &Path, config: &str) {
    write_file(root, "marklint.toml", config);
    write_file(root, "clean.html", "<p>hello</p>\n");
    write_file(root, "pages/spaces.html", "<ul>\n    <li>a</li>\n</ul>\n");
    write_file(root, "pages/tabs.html", "<ul>\n\t<li>a</li>\n</ul>\n");
    write_file(root, "notes.txt", "    not markup\n");
}
