/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Auto-discovery
// ============================================================================

#[test]
fn test_discovered_config_sets_format_and_page_size() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("fleet-views.config.yml"),
        "format: json\npage_size: 3\n",
    );

    let output = cargo_bin_cmd!("fleet-views")
        .current_dir(dir.path())
        .arg("inventory")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["view"]["page"]["page_size"], 3);
    assert_eq!(value["view"]["page"]["total_pages"], 3);
}

#[test]
fn test_cli_flags_override_discovered_config() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("fleet-views.config.yml"),
        "format: json\npage_size: 3\n",
    );

    cargo_bin_cmd!("fleet-views")
        .current_dir(dir.path())
        .args(["inventory", "-f", "markdown", "--page-size", "4"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Device Inventory"))
        .stdout(predicate::str::contains("*Page 1 of 2*"));
}

#[test]
fn test_config_dataset_path() {
    let dir = TempDir::new().unwrap();
    let dataset = fixture("dataset.yml");
    write_config(
        &dir.path().join("fleet-views.config.yml"),
        &format!("dataset: \"{}\"\n", dataset.display()),
    );

    cargo_bin_cmd!("fleet-views")
        .current_dir(dir.path())
        .arg("inventory")
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Total devices:** 2"));
}

#[test]
fn test_config_calendar_layout() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("fleet-views.config.yml"),
        "format: json\ncalendar:\n  grid_length: 42\n  leading_offset: 5\n",
    );

    let output = cargo_bin_cmd!("fleet-views")
        .current_dir(dir.path())
        .args(["calendar", "--year", "2026", "--month", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["view"]["grid_length"], 42);
    assert_eq!(value["view"]["leading_offset"], 5);
    assert_eq!(value["view"]["cells"].as_array().unwrap().len(), 42);
}

#[test]
fn test_no_config_uses_defaults() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("fleet-views")
        .current_dir(dir.path())
        .arg("inventory")
        .assert()
        .success()
        .stdout(predicate::str::contains("*Page 1 of 2*"));
}

// ============================================================================
// Explicit --config
// ============================================================================

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.yml");
    write_config(&config_path, "page_size: 8\n");

    cargo_bin_cmd!("fleet-views")
        .arg("inventory")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("*Page 1 of 1*"));
}

#[test]
fn test_explicit_config_missing_is_error() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("fleet-views")
        .arg("inventory")
        .arg("-c")
        .arg(dir.path().join("missing.yml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// Validation and warnings
// ============================================================================

#[test]
fn test_zero_page_size_in_config_is_invalid_argument() {
    let dir = TempDir::new().unwrap();
    write_config(&dir.path().join("fleet-views.config.yml"), "page_size: 0\n");

    cargo_bin_cmd!("fleet-views")
        .current_dir(dir.path())
        .arg("inventory")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("page_size must be greater than zero"));
}

#[test]
fn test_invalid_yaml_is_application_error() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("fleet-views.config.yml"),
        "invalid: yaml: [[[broken",
    );

    cargo_bin_cmd!("fleet-views")
        .current_dir(dir.path())
        .arg("inventory")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_unknown_config_field_warns() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("fleet-views.config.yml"),
        "format: markdown\ntheme: dark\n",
    );

    cargo_bin_cmd!("fleet-views")
        .current_dir(dir.path())
        .arg("inventory")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'theme' will be ignored",
        ));
}
