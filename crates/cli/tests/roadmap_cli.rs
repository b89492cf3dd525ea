use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const REQUEST: &str = r#"{
    "firmId": "firm-acme",
    "version": "v1",
    "executiveBrief": {"id": "brief-acme", "content": "Stabilize delivery."},
    "findings": [
        {"id": "dx-1", "title": "High Risk Fix", "priority": "HIGH", "riskLevel": "HIGH", "isInternalOnly": true},
        {"id": "dx-2", "title": "Medium Infra", "priority": "MEDIUM", "category": "INFRASTRUCTURE"},
        {"id": "dx-3", "title": "Long Term Bet", "priority": "LOW"}
    ]
}"#;

#[allow(deprecated)]
fn roadmap() -> Command {
    Command::cargo_bin("roadmap").expect("binary")
}

fn run(cmd: &mut Command) -> (bool, Value) {
    let output = cmd.output().expect("command run");
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    (output.status.success(), body)
}

fn section_ids(body: &Value) -> Vec<String> {
    body["data"]["sections"]
        .as_array()
        .expect("sections")
        .iter()
        .map(|s| s["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn write_request(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("request.json");
    fs::write(&path, REQUEST).unwrap();
    path
}

#[test]
fn assemble_from_file_emits_ok_envelope() {
    let temp = tempdir().unwrap();
    let request = write_request(temp.path());

    let (ok, body) = run(roadmap().arg("assemble").arg(&request));
    assert!(ok, "assemble failed: {body}");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["data"]["status"], "DRAFT");
    assert_eq!(body["meta"]["schema_version"], 1);
    assert_eq!(
        section_ids(&body),
        vec![
            "executive-logic",
            "operational-integrity",
            "operational-infrastructure",
            "strategic-capabilities",
            "risk-watchpoints",
        ]
    );
}

#[test]
fn assemble_from_stdin_with_delegate_viewer_redacts() {
    let (ok, body) = run(roadmap()
        .arg("assemble")
        .arg("--viewer")
        .arg("delegate")
        .write_stdin(REQUEST));
    assert!(ok, "assemble failed: {body}");
    assert_eq!(body["meta"]["viewer"], "DELEGATE");
    assert_eq!(
        section_ids(&body),
        vec![
            "executive-logic",
            "operational-infrastructure",
            "strategic-capabilities",
        ]
    );
    assert!(!body["data"].to_string().contains("High Risk Fix"));
}

#[test]
fn project_reads_a_stored_model() {
    let temp = tempdir().unwrap();
    let request = write_request(temp.path());
    let (ok, assembled) = run(roadmap().arg("assemble").arg(&request));
    assert!(ok);

    let model_path = temp.path().join("model.json");
    fs::write(&model_path, assembled["data"].to_string()).unwrap();

    let (ok, executive) = run(roadmap()
        .arg("project")
        .arg(&model_path)
        .arg("--viewer")
        .arg("executive"));
    assert!(ok);
    assert_eq!(executive["data"], assembled["data"]);

    let (ok, delegate) = run(roadmap()
        .arg("project")
        .arg(&model_path)
        .arg("--viewer")
        .arg("delegate"));
    assert!(ok);
    assert!(!section_ids(&delegate).contains(&"risk-watchpoints".to_string()));
}

#[test]
fn missing_firm_id_is_an_error() {
    let (ok, body) = run(roadmap()
        .arg("assemble")
        .write_stdin(r#"{"version":"v1","executiveBrief":{"id":"b","content":"x"}}"#));
    assert!(!ok);
    assert_eq!(body["status"], "error");
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("firm_id"), "unexpected message: {message}");
}

#[test]
fn empty_input_is_an_error() {
    let (ok, body) = run(roadmap().arg("assemble").write_stdin("  \n"));
    assert!(!ok);
    assert_eq!(body["status"], "error");
}

#[test]
fn sections_honors_custom_config() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("roadmap.toml");
    fs::write(
        &config,
        r#"
[[sections]]
id = "now"
title = "Now"
order = 1
render_mode = "grid"
max_items = 2
fill = { kind = "horizon", days = 30 }
"#,
    )
    .unwrap();

    let (ok, body) = run(roadmap().arg("sections").arg("--config").arg(&config));
    assert!(ok);
    let sections = body["data"].as_array().expect("array");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["id"], "now");
    assert_eq!(sections[0]["fill"]["kind"], "horizon");
    assert_eq!(sections[0]["fill"]["days"], 30);
}

#[test]
fn bad_config_reports_error() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("roadmap.toml");
    fs::write(&config, "brief_excerpt_chars = 0\n").unwrap();

    roadmap()
        .arg("sections")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("brief_excerpt_chars"));
}
