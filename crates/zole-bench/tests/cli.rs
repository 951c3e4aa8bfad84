use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn validate_only_leaves_no_artifacts() {
    let dir = tempdir().expect("temp dir");
    let out = dir.path().join("out");
    let config_path = dir.path().join("bench.yaml");
    let yaml = format!(
        r#"
run_id: "cli_validate"
deals:
  seed: 1
  hands: 3
outputs:
  jsonl: "{jsonl}"
  summary_md: "{summary}"
logging:
  enable_structured: true
"#,
        jsonl = out.join("deals.jsonl").display(),
        summary = out.join("summary.md").display(),
    );
    fs::write(&config_path, yaml).expect("write config");

    Command::cargo_bin("zole-bench")
        .expect("binary built")
        .arg("--config")
        .arg(&config_path)
        .arg("--validate-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("zole 0.1.0 (Three-Hand Deal)"))
        .stdout(predicate::str::contains("Validation-only mode"));

    assert!(!out.join("telemetry.jsonl").exists());
    assert!(!out.join("deals.jsonl").exists());
}

#[test]
fn print_deck_lists_the_catalog() {
    let output = Command::cargo_bin("zole-bench")
        .expect("binary built")
        .arg("--print-deck")
        .output()
        .expect("runs");
    assert!(output.status.success());

    let entries: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("catalog is JSON");
    assert_eq!(entries.len(), 26);
    assert_eq!(entries[0]["name"], "QC");
    assert_eq!(entries[1]["value"], 4);
    assert_eq!(entries[25]["name"], "7D");
}
