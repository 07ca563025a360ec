//! Integration tests for the check, init and list commands
//!
//! NOTE: These tests change the current directory and use the serial_test attribute
//! to ensure they run sequentially and don't interfere with each other.

mod common;

use common::{setup_site, write_file};
use marklint::cli::common::{EXIT_DIAGNOSTICS, EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use marklint::cli::{ColorChoice, OutputFormat};
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Runs `f` with the working directory set to a fresh temporary directory
fn in_temp_dir<F>(f: F)
where
    F: FnOnce(&Path),
{
    let temp_dir = TempDir::new().unwrap();
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    f(temp_dir.path());

    std::env::set_current_dir(original_dir).unwrap();
}

fn check(paths: &[&str], format: OutputFormat) -> i32 {
    let paths: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
    marklint::cli::check::run_check(&paths, Some(format), None, Some(ColorChoice::Never))
}

const SPACE_CONFIG: &str = r#"
[marklint]
version = "1"

[rules]
indent = "space"
"#;

#[test]
#[serial]
fn test_check_reports_diagnostics() {
    in_temp_dir(|root| {
        setup_site(root, SPACE_CONFIG);
        assert_eq!(check(&["."], OutputFormat::Human), EXIT_DIAGNOSTICS);
    });
}

#[test]
#[serial]
fn test_check_clean_subdirectory() {
    in_temp_dir(|root| {
        setup_site(root, SPACE_CONFIG);
        write_file(root, "clean/index.html", "<ul>\n  <li>a</li>\n</ul>\n");
        assert_eq!(check(&["clean"], OutputFormat::Jsonl), EXIT_SUCCESS);
    });
}

#[test]
#[serial]
fn test_check_respects_exclude() {
    in_temp_dir(|root| {
        setup_site(
            root,
            r#"
[marklint]
version = "1"
exclude = ["**/pages/tabs.html"]

[rules]
indent = "space"
"#,
        );
        assert_eq!(check(&["."], OutputFormat::Human), EXIT_SUCCESS);
    });
}

#[test]
#[serial]
fn test_check_without_config() {
    in_temp_dir(|root| {
        write_file(root, "index.html", "<p>x</p>");
        assert_eq!(check(&["."], OutputFormat::Human), EXIT_ERROR);
    });
}

#[test]
#[serial]
fn test_check_with_invalid_toml() {
    in_temp_dir(|root| {
        write_file(root, "marklint.toml", "[marklint\nversion = 1");
        assert_eq!(check(&["."], OutputFormat::Human), EXIT_PARSE_ERROR);
    });
}

#[test]
#[serial]
fn test_check_with_bad_rule_options() {
    in_temp_dir(|root| {
        setup_site(
            root,
            r#"
[marklint]
version = "1"

[rules]
indent = "bogus"
"#,
        );
        assert_eq!(check(&["."], OutputFormat::Human), EXIT_ERROR);
    });
}

#[test]
#[serial]
fn test_check_with_no_enabled_rules() {
    in_temp_dir(|root| {
        setup_site(
            root,
            "[marklint]\nversion = \"1\"\n[rules]\nindent = false\n",
        );
        assert_eq!(check(&["."], OutputFormat::Human), EXIT_SUCCESS);
    });
}

#[test]
#[serial]
fn test_init_then_check() {
    in_temp_dir(|root| {
        assert_eq!(marklint::cli::init::run_init(false), EXIT_SUCCESS);
        assert!(root.join("marklint.toml").is_file());

        // Default config selects space indentation
        write_file(root, "index.html", "<div>\n\t<p>x</p>\n</div>\n");
        assert_eq!(check(&["."], OutputFormat::Human), EXIT_DIAGNOSTICS);
    });
}

#[test]
#[serial]
fn test_init_does_not_clobber_without_force() {
    in_temp_dir(|root| {
        fs::write(root.join("marklint.toml"), "keep me").unwrap();
        assert_eq!(marklint::cli::init::run_init(false), EXIT_SUCCESS);
        assert_eq!(fs::read_to_string(root.join("marklint.toml")).unwrap(), "keep me");
    });
}

#[test]
#[serial]
fn test_list_uses_local_config() {
    in_temp_dir(|root| {
        setup_site(root, SPACE_CONFIG);
        assert_eq!(
            marklint::cli::list::run_list(OutputFormat::Jsonl, None),
            EXIT_SUCCESS
        );
    });
}

#[test]
#[serial]
fn test_list_with_broken_local_config() {
    in_temp_dir(|root| {
        write_file(root, "marklint.toml", "not = [toml");
        assert_eq!(
            marklint::cli::list::run_list(OutputFormat::Human, None),
            EXIT_PARSE_ERROR
        );
    });
}
