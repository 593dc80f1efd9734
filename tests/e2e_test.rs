/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("fleet-views")
            .arg("inventory")
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("fleet-views")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Usage"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("fleet-views")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("fleet-views")
            .args(["inventory", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Unknown view name
    #[test]
    fn test_exit_code_unknown_view() {
        cargo_bin_cmd!("fleet-views")
            .arg("warehouse")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid view: warehouse"));
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("fleet-views")
            .args(["inventory", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Page size of zero
    #[test]
    fn test_exit_code_zero_page_size() {
        cargo_bin_cmd!("fleet-views")
            .args(["inventory", "--page-size", "0"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid page size: 0"));
    }

    /// Exit code 2: Status label outside the view's status set
    #[test]
    fn test_exit_code_unknown_status() {
        cargo_bin_cmd!("fleet-views")
            .args(["firmware", "-s", "archived"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Unknown"))
            .stderr(predicate::str::contains("archived"));
    }

    /// Exit code 2: Calendar month out of range
    #[test]
    fn test_exit_code_invalid_month() {
        cargo_bin_cmd!("fleet-views")
            .args(["calendar", "--year", "2026", "--month", "13"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid calendar month"));
    }

    /// Exit code 2: Calendar grid too large to lay out
    #[test]
    fn test_exit_code_oversized_grid_length() {
        cargo_bin_cmd!("fleet-views")
            .args(["calendar", "--grid-length", "18446744073709551615"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid calendar grid length"));
    }

    /// Exit code 2: Analytics has no status filter
    #[test]
    fn test_exit_code_analytics_status() {
        cargo_bin_cmd!("fleet-views")
            .args(["analytics", "-s", "online"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - missing dataset file
    #[test]
    fn test_exit_code_missing_dataset() {
        cargo_bin_cmd!("fleet-views")
            .args(["inventory", "-d", "/nonexistent/fleet.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Dataset file not found"));
    }

    /// Exit code 3: Application error - unsupported dataset extension
    #[test]
    fn test_exit_code_unsupported_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fleet.csv");
        fs::write(&path, "id,name\n1,Router\n").unwrap();

        cargo_bin_cmd!("fleet-views")
            .arg("inventory")
            .arg("-d")
            .arg(&path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Unsupported dataset format"));
    }

    /// Exit code 3: Application error - malformed dataset
    #[test]
    fn test_exit_code_malformed_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fleet.json");
        fs::write(&path, r#"{"devices": [{"id": "1", "status": "Exploded"}]}"#).unwrap();

        cargo_bin_cmd!("fleet-views")
            .arg("inventory")
            .arg("-d")
            .arg(&path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse dataset file"));
    }
}

#[test]
fn test_e2e_inventory_markdown() {
    cargo_bin_cmd!("fleet-views")
        .arg("inventory")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Device Inventory"))
        .stdout(predicate::str::contains("- **Total devices:** 8"))
        .stdout(predicate::str::contains("*Showing 1 to 6 of 8 results*"))
        .stdout(predicate::str::contains("*Page 1 of 2*"))
        .stderr(predicate::str::contains(
            "📂 Loading dataset from: built-in seed data",
        ));
}

#[test]
fn test_e2e_inventory_page_clamped() {
    cargo_bin_cmd!("fleet-views")
        .args(["inventory", "-p", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*Page 2 of 2*"))
        .stdout(predicate::str::contains("UPS-POWER-05"))
        .stdout(predicate::str::contains("Router-WAN-01").not());
}

#[test]
fn test_e2e_compliance_status_filter() {
    cargo_bin_cmd!("fleet-views")
        .args(["compliance", "-s", "pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "*Filtered by status pending (2 matching records)*",
        ))
        .stdout(predicate::str::contains("- **Approved:** 4 (50%)"))
        .stderr(predicate::str::contains("🔎 2 record(s) match the filter"));
}

#[test]
fn test_e2e_service_board_alias() {
    cargo_bin_cmd!("fleet-views")
        .arg("kanban")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Service Orders"))
        .stdout(predicate::str::contains("## Scheduled (4)"));
}

#[test]
fn test_e2e_calendar_february() {
    cargo_bin_cmd!("fleet-views")
        .args([
            "calendar",
            "--year",
            "2026",
            "--month",
            "2",
            "--leading-offset",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## February 2026"))
        .stdout(predicate::str::contains("|  |  |  |  |  | **1** | **2** |"));
}

#[test]
fn test_e2e_calendar_offset_beyond_grid_is_all_out_of_month() {
    let output = cargo_bin_cmd!("fleet-views")
        .args([
            "calendar",
            "--year",
            "2026",
            "--month",
            "3",
            "--leading-offset",
            "18446744073709551615",
            "-f",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cells = value["view"]["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 35);
    assert!(cells.iter().all(|c| c["in_current_month"] == false));
    assert!(cells.iter().all(|c| c["orders"].as_array().unwrap().is_empty()));
}

#[test]
fn test_e2e_analytics_query_warning() {
    cargo_bin_cmd!("fleet-views")
        .args(["analytics", "-q", "xr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Customer Segments"))
        .stderr(predicate::str::contains("not searchable"));
}

#[test]
fn test_e2e_json_format() {
    let output = cargo_bin_cmd!("fleet-views")
        .args(["audit", "-f", "json", "-q", "mike"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["title"], "Download Audit Log");
    assert_eq!(value["view"]["kind"], "audit-log");
    assert_eq!(value["view"]["page"]["total_items"], 1);
    assert_eq!(value["filter"]["query"], "mike");
    assert!(value["metadata"]["report_id"]
        .as_str()
        .unwrap()
        .starts_with("urn:uuid:"));
}

#[test]
fn test_e2e_yaml_dataset() {
    cargo_bin_cmd!("fleet-views")
        .arg("inventory")
        .arg("-d")
        .arg(fixture("dataset.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Total devices:** 2"))
        .stdout(predicate::str::contains("- **Offline:** 1"));
}

#[test]
fn test_e2e_json_dataset_calendar_defaults_to_earliest_order() {
    cargo_bin_cmd!("fleet-views")
        .arg("calendar")
        .arg("-d")
        .arg(fixture("dataset.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("## February 2026"));
}

#[test]
fn test_e2e_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("firmware.md");

    cargo_bin_cmd!("fleet-views")
        .arg("firmware")
        .arg("-o")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("✅ View written to:"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Firmware Library"));
    assert!(content.contains("- **Total downloads:** 787"));
}

#[test]
fn test_e2e_quiet_suppresses_progress() {
    cargo_bin_cmd!("fleet-views")
        .args(["inventory", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loading dataset").not());
}
