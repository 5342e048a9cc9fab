//! End-to-end tests for the `update-settings` binary.
//!
//! Each test lays out a scratch Redmine root with `config/settings.yml`,
//! runs the compiled binary inside it, and inspects the exit status, stdout
//! and the file left on disk.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_yaml::Value;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("../../settings-core/tests/fixtures/settings.yml");
const CONFIRMATION: &str = "Updated config/settings.yml successfully.\n";

fn redmine_root(settings: &str) -> (TempDir, PathBuf) {
    let root = tempfile::tempdir().expect("tempdir");
    let config = root.path().join("config");
    std::fs::create_dir_all(&config).unwrap();
    let path = config.join("settings.yml");
    std::fs::write(&path, settings).unwrap();
    (root, path)
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_update-settings"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

fn read_yaml(path: &Path) -> Value {
    serde_yaml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ── Success path ──────────────────────────────────────────────────────────────

#[test]
fn test_patches_default_path_and_prints_confirmation() {
    // Arrange
    let (root, path) = redmine_root(FIXTURE);

    // Act
    let output = run_in(root.path(), &["--hostname", "example.com"]);

    // Assert
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), CONFIRMATION);

    let doc = read_yaml(&path);
    assert_eq!(doc["host_name"]["default"].as_str(), Some("example.com:9441"));
    assert_eq!(doc["protocol"]["default"].as_str(), Some("https"));
    assert_eq!(doc["email_domains_allowed"]["default"].as_str(), Some("example.com"));
    assert_eq!(doc["mail_from"]["default"].as_str(), Some("redmine@example.com"));
    assert_eq!(doc["self_registration"]["default"], Value::String("0".to_string()));
    assert_eq!(doc["twofa"]["default"].as_i64(), Some(0));
}

#[test]
fn test_link_copied_issue_lands_quoted_on_disk() {
    let (root, path) = redmine_root(FIXTURE);

    let output = run_in(root.path(), &["--hostname", "example.com"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("link_copied_issue:\n  default: 'no'\n"), "{text}");
}

#[test]
fn test_untouched_settings_survive() {
    let (root, path) = redmine_root(FIXTURE);
    let before = read_yaml(&path);

    let output = run_in(root.path(), &["--hostname", "example.com"]);

    assert!(output.status.success());
    let after = read_yaml(&path);
    for key in ["app_title", "password_min_length", "issue_list_default_columns", "ui_theme"] {
        assert_eq!(after[key], before[key], "{key}");
    }
    assert_eq!(after["protocol"]["security_notifications"].as_i64(), Some(1));
}

#[test]
fn test_second_run_leaves_identical_bytes() {
    // Arrange
    let (root, path) = redmine_root(FIXTURE);
    assert!(run_in(root.path(), &["--hostname", "example.com"]).status.success());
    let first = std::fs::read(&path).unwrap();

    // Act
    let output = run_in(root.path(), &["--hostname", "example.com"]);

    // Assert
    assert!(output.status.success());
    assert_eq!(std::fs::read(&path).unwrap(), first);
}

#[test]
fn test_settings_flag_targets_other_file() {
    // Arrange: settings file outside the conventional location
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("redmine-settings.yml");
    std::fs::write(&path, FIXTURE).unwrap();
    let path_arg = path.to_str().unwrap();

    // Act
    let output = run_in(dir.path(), &["--hostname", "10.0.0.5", "--settings", path_arg]);

    // Assert
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), format!("Updated {path_arg} successfully.\n"));
    assert_eq!(read_yaml(&path)["host_name"]["default"].as_str(), Some("10.0.0.5:9441"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let (root, _path) = redmine_root(FIXTURE);

    let output = Command::new(env!("CARGO_BIN_EXE_update-settings"))
        .args(["--hostname", "example.com"])
        .current_dir(root.path())
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), CONFIRMATION);
    assert!(stderr(&output).contains("settings written"));
}

// ── Failure paths ─────────────────────────────────────────────────────────────

#[test]
fn test_missing_twofa_aborts_without_writing() {
    // Arrange
    let settings = FIXTURE.replace("twofa:\n  default: 1\n  security_notifications: 1\n", "");
    let (root, path) = redmine_root(&settings);

    // Act
    let output = run_in(root.path(), &["--hostname", "example.com"]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("twofa"), "stderr: {}", stderr(&output));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), settings);
}

#[test]
fn test_missing_default_field_aborts_without_writing() {
    let settings = FIXTURE.replace("protocol:\n  default: http\n", "protocol:\n");
    let (root, path) = redmine_root(&settings);

    let output = run_in(root.path(), &["--hostname", "example.com"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), settings);
}

#[test]
fn test_malformed_yaml_exits_non_zero() {
    let settings = "host_name:\n  default: [unterminated\n";
    let (root, path) = redmine_root(settings);

    let output = run_in(root.path(), &["--hostname", "example.com"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), settings);
}

#[test]
fn test_missing_file_exits_non_zero_and_creates_nothing() {
    let root = tempfile::tempdir().unwrap();

    let output = run_in(root.path(), &["--hostname", "example.com"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("config/settings.yml"));
    assert!(!root.path().join("config").exists());
}

#[test]
fn test_missing_hostname_is_a_usage_error() {
    // Arrange
    let (root, path) = redmine_root(FIXTURE);

    // Act
    let output = run_in(root.path(), &[]);

    // Assert
    assert_eq!(output.status.code(), Some(2));
    // Usage goes to stderr so stdout stays empty on every failure
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Usage: update-settings"));
    assert!(stderr(&output).contains("--hostname"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[test]
fn test_empty_hostname_is_a_usage_error() {
    let (root, path) = redmine_root(FIXTURE);

    let output = run_in(root.path(), &["--hostname", ""]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[test]
fn test_hostname_flag_without_value_is_a_usage_error() {
    let (root, path) = redmine_root(FIXTURE);

    let output = run_in(root.path(), &["--hostname"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[test]
fn test_help_prints_usage() {
    let root = tempfile::tempdir().unwrap();

    let output = run_in(root.path(), &["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Usage: update-settings"));
    assert!(text.contains("--hostname <HOSTNAME>"));
}
