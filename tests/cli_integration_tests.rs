//! Binary-level CLI tests
//!
//! These run the compiled `marklint` binary in a temporary directory and
//! check exit codes and output.

mod common;

use assert_cmd::Command;
use common::{setup_site, write_file};
use predicates::prelude::*;
use tempfile::TempDir;

const TAB_CONFIG: &str = r#"
[marklint]
version = "1"

[rules]
indent = "tab"
tagname-lowercase = true
"#;

fn marklint(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("marklint").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    Command::cargo_bin("marklint")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_check_human_output() {
    let temp_dir = TempDir::new().unwrap();
    setup_site(temp_dir.path(), TAB_CONFIG);

    marklint(&temp_dir)
        .args(["check", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "spaces.html:1:1: warning: use only tabs for indentation. [indent]",
        ))
        .stdout(predicate::str::contains("Found 1 diagnostic in 1 file (3 files checked)."))
        .stderr(predicate::str::contains("Checking 3 files with 2 rules..."));
}

#[test]
fn test_check_jsonl_output() {
    let temp_dir = TempDir::new().unwrap();
    setup_site(temp_dir.path(), TAB_CONFIG);

    let output = marklint(&temp_dir)
        .args(["check", "--format", "jsonl"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["type"], "diagnostic");
    assert_eq!(records[0]["rule"], "indent");
    assert_eq!(records[0]["evidence"], "\n    ");
    assert_eq!(records[1]["type"], "summary");
    assert_eq!(records[1]["files_checked"], 3);
    assert_eq!(records[1]["total_diagnostics"], 1);
}

#[test]
fn test_check_format_from_config() {
    let temp_dir = TempDir::new().unwrap();
    setup_site(
        temp_dir.path(),
        "[marklint]\nversion = \"1\"\n[rules]\ntagname-lowercase = true\n[output]\nformat = \"jsonl\"\n",
    );

    marklint(&temp_dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"type\":\"summary\""));
}

#[test]
fn test_check_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "ci/lint.toml", TAB_CONFIG);
    write_file(temp_dir.path(), "index.html", "<P>\n\tok</P>\n");

    marklint(&temp_dir)
        .args(["check", "--config", "ci/lint.toml", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[ P ]"))
        .stdout(predicate::str::contains("Found 2 diagnostics in 1 file"));
}

#[test]
fn test_check_activation_error_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    setup_site(
        temp_dir.path(),
        "[marklint]\nversion = \"1\"\n[rules]\nindent = \"bogus\"\ntagname-lowercase = true\n",
    );

    marklint(&temp_dir)
        .args(["check", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("rule 'indent' was not activated"))
        .stdout(predicate::str::contains("No problems found"));
}

#[test]
fn test_activation_error_printed_once() {
    let temp_dir = TempDir::new().unwrap();
    setup_site(
        temp_dir.path(),
        "[marklint]\nversion = \"1\"\n[rules]\nindent = \"bogus\"\n",
    );

    let output = marklint(&temp_dir)
        .args(["check", "--color", "never"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("rule 'indent' was not activated").count(), 1);
}

#[test]
fn test_check_parse_error_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "marklint.toml", "[marklint\n");

    marklint(&temp_dir)
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error: Configuration error"));
}

#[test]
fn test_check_missing_config() {
    let temp_dir = TempDir::new().unwrap();

    marklint(&temp_dir)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("marklint init"));
}

#[test]
fn test_verbose_logs_activation() {
    let temp_dir = TempDir::new().unwrap();
    setup_site(temp_dir.path(), TAB_CONFIG);

    marklint(&temp_dir)
        .args(["check", "-v", "--format", "jsonl"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Activated rule indent"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    marklint(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created marklint.toml."));
    assert!(temp_dir.path().join("marklint.toml").is_file());

    marklint(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("--force"));

    marklint(&temp_dir)
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrote marklint.toml."));
}

#[test]
fn test_list_human() {
    let temp_dir = TempDir::new().unwrap();

    marklint(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules (3 available, 0 enabled):"))
        .stdout(predicate::str::contains(
            "indent\n  Description: Do not mix tabs and spaces for indentation.",
        ))
        .stdout(predicate::str::contains("style-disabled"))
        .stdout(predicate::str::contains("tagname-lowercase"));
}

#[test]
fn test_list_jsonl_with_config() {
    let temp_dir = TempDir::new().unwrap();
    setup_site(temp_dir.path(), TAB_CONFIG);

    let output = marklint(&temp_dir)
        .args(["list", "--format", "jsonl"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["rule_id"], "indent");
    assert_eq!(records[0]["status"], "enabled");
    assert_eq!(records[0]["options"], "\"tab\"");
    assert_eq!(records[1]["status"], "unconfigured");
    assert_eq!(records[2]["status"], "enabled");
}
