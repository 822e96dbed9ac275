//! CLI integration tests.
//!
//! These tests invoke the termfx binary and verify command output and behaviour.

#![allow(deprecated)] // cargo_bin is deprecated but still works

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a Command for the termfx binary, isolated in `dir`.
fn termfx(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("termfx").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("TERMFX_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create a temp directory with .termfx/config.json.
fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".termfx");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), config).unwrap();
    temp
}

// ============================================================================
// Basic CLI tests
// ============================================================================

#[test]
fn test_no_args_shows_help_message() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("termfx"))
        .stdout(predicate::str::contains("Quick start"));
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("termfx"));
}

// ============================================================================
// Colorize and palette
// ============================================================================

#[test]
fn test_colorize_with_color_flag() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["colorize", "Hello", "-c", "red"])
        .assert()
        .success()
        .stdout("\x1b[31mHello\x1b[0m\n");
}

#[test]
fn test_colorize_defaults_to_white() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["colorize", "Hello"])
        .assert()
        .success()
        .stdout("\x1b[37mHello\x1b[0m\n");
}

#[test]
fn test_colorize_uses_configured_default() {
    let temp = setup_project(r#"{"colorize": {"default_color": "orange"}}"#);
    termfx(&temp)
        .args(["colorize", "Hello"])
        .assert()
        .success()
        .stdout("\x1b[38;5;208mHello\x1b[0m\n");
}

#[test]
fn test_colorize_rejects_unknown_color() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["colorize", "Hello", "-c", "pink"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pink"));
}

#[test]
fn test_palette_prints_every_color() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["palette", "Hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("white"))
        .stdout(predicate::str::contains("\x1b[38;5;129mHi\x1b[0m"))
        .stdout(predicate::function(|s: &str| s.lines().count() == 8));
}

#[test]
fn test_invalid_config_reports_error() {
    let temp = setup_project("{ not json");
    termfx(&temp)
        .args(["colorize", "Hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("\x1b[31mError:\x1b[0m "))
        .stderr(predicate::str::contains("could not load config"));
}

// ============================================================================
// Progress and loader
// ============================================================================

#[test]
fn test_progress_runs_to_completion() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["progress", "-w", "4", "--step", "0.5", "--step-ms", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\r\x1b[K"))
        .stdout(predicate::str::contains("\x1b[32m==\x1b[0m==50%"))
        .stdout(predicate::str::ends_with("\x1b[32m====\x1b[0m100%\n"));
}

#[test]
fn test_loader_stops_with_done() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["loader", "-k", "spin", "-m", "Working", "-i", "50", "-d", "300"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[?25l"))
        .stdout(predicate::str::contains("Working"))
        .stdout(predicate::str::contains("\x1b[?25h"))
        .stdout(predicate::str::ends_with("\x1b[32m✔\x1b[0m Done\n"));
}

#[test]
fn test_loader_rejects_unknown_kind() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["loader", "-k", "wheel"])
        .assert()
        .failure();
}

// ============================================================================
// Config command
// ============================================================================

#[test]
fn test_config_set_then_get() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["config", "set", "loader.kind", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("loader.kind: dots → bar"));

    assert!(temp.path().join(".termfx/config.json").exists());

    termfx(&temp)
        .args(["config", "get", "loader.kind"])
        .assert()
        .success()
        .stdout("bar\n");
}

#[test]
fn test_config_set_invalid_value_fails() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["config", "set", "progress.width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for width"));

    assert!(!temp.path().join(".termfx/config.json").exists());
}

#[test]
fn test_config_flag_overrides_location() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("custom.json");

    termfx(&temp)
        .args(["--config", custom.to_str().unwrap()])
        .args(["config", "set", "progress.fill_char", "#"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!temp.path().join(".termfx").exists());
}

#[test]
fn test_config_show_and_keys() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("colorize"))
        .stdout(predicate::str::contains("interval_ms"));

    termfx(&temp)
        .args(["config", "keys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("loader.duration_ms"));
}

#[test]
fn test_config_reset_restores_default() {
    let temp = setup_project(r#"{"loader": {"message": "Busy"}}"#);
    termfx(&temp)
        .args(["config", "reset", "loader.message"])
        .assert()
        .success();

    termfx(&temp)
        .args(["config", "get", "loader.message"])
        .assert()
        .success()
        .stdout("Loading\n");
}

#[test]
fn test_config_explain_key() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["config", "explain", "progress.width"])
        .assert()
        .success()
        .stdout(predicate::str::contains("positive integer"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termfx"));
}

#[test]
fn test_completions_rejects_unknown_shell() {
    let temp = TempDir::new().unwrap();
    termfx(&temp)
        .args(["completions", "powershell"])
        .assert()
        .failure();
}
