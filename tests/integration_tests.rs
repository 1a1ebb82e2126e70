//! Integration tests for the pmo CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TODAY: &str = "2025-08-06";

/// A pmo command isolated from any user or local config
fn pmo(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pmo").unwrap();
    cmd.current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path())
        .env("HOME", tmp.path())
        .env_remove("PMO_DATASET")
        .env_remove("PMO_FORMAT")
        .env_remove("PMO_TODAY")
        .env_remove("PMO_LOG")
        .args(["--today", TODAY]);
    cmd
}

// ============================================================================
// Status
// ============================================================================

#[test]
fn test_status_json_headline() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["status", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"active_projects\": 5"))
        .stdout(predicate::str::contains("\"open_cross_project\": 3"))
        .stdout(predicate::str::contains("\"today\": \"2025-08-06\""));
}

#[test]
fn test_status_markdown() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["status", "-f", "md", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PMO Dashboard (2025-08-06)"))
        .stdout(predicate::str::contains("Active projects"));
}

#[test]
fn test_status_auto_renders() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("PMO Dashboard"))
        .stdout(predicate::str::contains("Reference date: 2025-08-06"))
        .stdout(predicate::str::contains("PORTFOLIO"));
}

#[test]
fn test_status_with_custom_dataset() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data.json");
    fs::write(
        &path,
        r#"{"projects":[{"id":"p1","name":"Solo PJ","status":"delayed","progress":100}]}"#,
    )
    .unwrap();

    pmo(&tmp)
        .args(["status", "-f", "json", "--dataset"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"active_projects\": 0"))
        .stdout(predicate::str::contains("Solo PJ"));
}

#[test]
fn test_dataset_from_local_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("solo.yaml"),
        "projects:\n  - id: p9\n    name: Configured PJ\n    progress: 10\n",
    )
    .unwrap();
    fs::write(tmp.path().join("pmo.yaml"), "dataset: solo.yaml\ndefault_format: json\n").unwrap();

    pmo(&tmp)
        .args(["report", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configured PJ"))
        .stdout(predicate::str::contains("\"projects\""));
}

#[test]
fn test_unresolved_reference_warned_once() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("dangling.yaml");
    fs::write(
        &path,
        "projects:\n  - { id: proj-001, name: Core PJ }\nquality_kpis:\n  - { project_id: proj-404, phase: Design }\n",
    )
    .unwrap();

    let output = pmo(&tmp)
        .args(["status", "-f", "json", "--dataset"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("unresolved project reference").count(), 1);
    assert!(stderr.contains("proj-404"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"unresolved_references\""));
    assert!(stdout.contains("proj-404"));
}

#[test]
fn test_null_enum_value_in_dataset_loads() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nulls.json");
    fs::write(
        &path,
        r#"{"projects":[{"id":"p1","name":"Null PJ","status":null,"progress":40}],
            "team_coordinations":[{"id":"t1","project_id":"p1","from_team":7,"to_team":"app",
            "topic":"Sync","priority":false,"status":null,"due_date":"2025-08-07"}]}"#,
    )
    .unwrap();

    pmo(&tmp)
        .args(["status", "-f", "json", "--dataset"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Null PJ"))
        .stdout(predicate::str::contains("\"status\": \"unknown\""));
}

#[test]
fn test_missing_dataset_fails() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["status", "--dataset", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read dataset"));
}

#[test]
fn test_malformed_dataset_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.yaml");
    fs::write(&path, "projects:\n  - id: [\n").unwrap();

    pmo(&tmp)
        .args(["status", "--dataset"])
        .arg(&path)
        .assert()
        .failure();
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_report_projects_status_filter() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["report", "projects", "-s", "delayed", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"proj-004\""))
        .stdout(predicate::str::contains("\"id\": \"proj-001\"").not());
}

#[test]
fn test_report_projects_markdown() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["report", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Status Report"))
        .stdout(predicate::str::contains("Security Hardening PJ"))
        .stdout(predicate::str::contains("Status Breakdown"));
}

#[test]
fn test_report_kpi() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["report", "kpi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("92% / 90% (success)"));
}

#[test]
fn test_report_coordination_open_only() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["report", "coord", "--open", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coord-001"))
        .stdout(predicate::str::contains("coord-003").not())
        .stdout(predicate::str::contains("team-003").not());
}

#[test]
fn test_report_weekly_for_project() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["report", "weekly", "-p", "proj-001", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("issue-001"))
        .stdout(predicate::str::contains("\"overdue\": 1"))
        .stdout(predicate::str::contains("proj-002").not());
}

#[test]
fn test_report_weekly_shows_decision_rationale() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["report", "weekly", "-p", "proj-005", "-f", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Decisions: 1 (0 pending)"))
        .stdout(predicate::str::contains("| Risk"))
        .stdout(predicate::str::contains("dec-005 rationale: React Native was chosen."));
}

#[test]
fn test_report_weekly_unknown_project() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["report", "weekly", "-p", "proj-404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No weekly report"));
}

#[test]
fn test_report_portfolio_to_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("portfolio.md");

    pmo(&tmp)
        .args(["report", "pfm", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report written to:"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Portfolio Report"));
    assert!(content.contains("AI and Data Platform"));
}

#[test]
fn test_report_resources_tsv() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["report", "resources", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project\tSide\tPlanning"))
        .stdout(predicate::str::contains("Resource Matrix").not());
}

// ============================================================================
// Integrations
// ============================================================================

#[test]
fn test_integrations_list() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["integrations", "list", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"configured\""))
        .stdout(predicate::str::contains("\"status\": \"not-configured\""));
}

#[test]
fn test_integrations_check_updates_status() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("proj-004.yaml");
    fs::write(&path, "id: proj-004\nname: Security Hardening PJ\ncloud_app: SharePoint\n").unwrap();

    pmo(&tmp)
        .args(["integrations", "check", "-f", "json"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"partial\""))
        .stdout(predicate::str::contains("\"previous_status\": \"not-configured\""))
        .stdout(predicate::str::contains("\"known_project\": true"));
}

#[test]
fn test_integrations_check_malformed_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.yaml");
    fs::write(&path, "id: [unterminated\n").unwrap();

    pmo(&tmp)
        .args(["integrations", "check"])
        .arg(&path)
        .assert()
        .failure();
}

// ============================================================================
// Classifiers
// ============================================================================

#[test]
fn test_roi_band_boundaries() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["roi", "199", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"band\": \"minimal\""));
    pmo(&tmp)
        .args(["roi", "200", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"band\": \"small\""))
        .stdout(predicate::str::contains("\"size\": 14"));
    pmo(&tmp)
        .args(["roi", "400", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"size\": 24"));
}

#[test]
fn test_roi_spend_efficiency() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["roi", "285", "--budget", "1200", "--spent", "1020", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"spend_efficiency\": 85"));
}

#[test]
fn test_roi_negative_value() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["roi", "-50", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"band\": \"minimal\""));
}

#[test]
fn test_due_overdue_and_urgent() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["due", "2025-08-05", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"overdue\""))
        .stdout(predicate::str::contains("\"days\": -1"));
    pmo(&tmp)
        .args(["due", "2025-08-09", "-f", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("urgent, 3 days remaining"));
}

#[test]
fn test_due_unparseable() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["due", "someday", "-f", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A"));
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pmo"));
}

#[test]
fn test_help_lists_commands() {
    let tmp = TempDir::new().unwrap();
    pmo(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("integrations"));
}
