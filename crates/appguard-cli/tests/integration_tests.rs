//! Integration tests for appguard-cli.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VALID: &str = r#"{
  "metadata": { "name": "spark" },
  "spec": {
    "image": { "repoTag": "registry/spark:2.4" },
    "roles": [ { "id": "controller" }, { "id": "worker" } ],
    "services": [
      { "id": "ui", "endpoint": { "urlScheme": "http", "isDashboard": true } }
    ],
    "config": {
      "selectedRoles": ["controller"],
      "roleServices": [ { "roleId": "controller", "serviceIds": ["ui"] } ]
    }
  }
}"#;

const DANGLING: &str = r#"{
  "spec": {
    "image": { "repoTag": "registry/spark:2.4" },
    "roles": [ { "id": "controller" }, { "id": "worker" } ],
    "config": { "roleServices": [ { "roleId": "ghost" } ] }
  }
}"#;

/// A command isolated from the caller's environment and config files.
fn appguard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("appguard").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir);
    cmd
}

fn write(dir: &TempDir, name: &str, body: &str) {
    fs::write(dir.path().join(name), body).unwrap();
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    appguard(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("review"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    appguard(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_check_valid_document() {
    let dir = TempDir::new().unwrap();
    write(&dir, "app.json", VALID);

    appguard(dir.path())
        .args(["check", "app.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app.json"));
}

#[test]
fn test_check_rejected_document_exits_5() {
    let dir = TempDir::new().unwrap();
    write(&dir, "app.json", DANGLING);

    appguard(dir.path())
        .args(["check", "app.json"])
        .assert()
        .code(5)
        .stdout(predicate::str::contains(
            "Invalid role_id(ghost) in role_services array. Valid role IDs: controller,worker",
        ))
        .stderr(predicate::str::contains("1 of 1 document(s) rejected"));
}

#[test]
fn test_check_walks_directories_as_json() {
    let dir = TempDir::new().unwrap();
    let defs = dir.path().join("defs");
    fs::create_dir(&defs).unwrap();
    fs::write(defs.join("good.json"), VALID).unwrap();
    fs::write(defs.join("bad.json"), DANGLING).unwrap();
    fs::write(defs.join("README.md"), "not a document").unwrap();

    let assert = appguard(dir.path())
        .args(["check", "defs", "--output-format", "json"])
        .assert()
        .code(5);

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let results: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);

    let bad = results
        .iter()
        .find(|r| r["path"].as_str().unwrap().ends_with("bad.json"))
        .unwrap();
    assert_eq!(bad["allowed"], serde_json::json!(false));
    assert_eq!(bad["violations"][0]["rule"], "service-role-refs");
}

#[test]
fn test_check_undecodable_document_exits_2() {
    let dir = TempDir::new().unwrap();
    write(&dir, "good.json", VALID);
    write(&dir, "broken.json", "{ \"spec\": ");

    appguard(dir.path())
        .args(["check", "good.json", "broken.json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("EOF"))
        .stderr(predicate::str::contains("could not be decoded"));
}

#[test]
fn test_check_empty_directory_exits_3() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();

    appguard(dir.path())
        .args(["check", "empty"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No documents found"));
}

#[test]
fn test_review_from_stdin() {
    let dir = TempDir::new().unwrap();
    let review = format!(
        r#"{{"apiVersion":"admission.k8s.io/v1","kind":"AdmissionReview","request":{{"uid":"abc-123","operation":"CREATE","object":{}}}}}"#,
        DANGLING
    );

    let assert = appguard(dir.path())
        .arg("review")
        .write_stdin(review)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let reply: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(reply["kind"], "AdmissionReview");
    assert_eq!(reply["response"]["uid"], "abc-123");
    assert_eq!(reply["response"]["allowed"], serde_json::json!(false));
    assert!(
        reply["response"]["status"]["message"]
            .as_str()
            .unwrap()
            .starts_with("\nInvalid role_id(ghost)")
    );
}

#[test]
fn test_review_from_file_allows_delete() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "review.json",
        r#"{"request":{"uid":"d-1","operation":"DELETE"}}"#,
    );

    appguard(dir.path())
        .args(["review", "review.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allowed\": true"));
}

#[test]
fn test_review_honours_configured_operations() {
    let dir = TempDir::new().unwrap();
    let review = r#"{"request":{"uid":"u-1","operation":"UPDATE","object":{"spec":{"roles":[{"id":"a"}]}}}}"#;

    appguard(dir.path())
        .arg("review")
        .env("APPGUARD__ADMISSION__VALIDATED_OPERATIONS", "CREATE")
        .write_stdin(review)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allowed\": true"));
}

#[test]
fn test_rules_lists_catalogue() {
    let dir = TempDir::new().unwrap();
    appguard(dir.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("uniqueness"))
        .stdout(predicate::str::contains("service-properties"))
        .stdout(predicate::str::contains("each kind of failure once"))
        .stdout(predicate::str::contains("first violation only").not());
}

#[test]
fn test_rules_json_single_rule() {
    let dir = TempDir::new().unwrap();
    let assert = appguard(dir.path())
        .args(["rules", "role_properties", "--output-format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows[0]["name"], "role-properties");
    assert_eq!(rows[0]["stop_on_first"], serde_json::json!(true));
}

#[test]
fn test_config_show_defaults() {
    let dir = TempDir::new().unwrap();
    appguard(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[admission]"))
        .stdout(predicate::str::contains("\"UPDATE\""));
}

#[test]
fn test_config_path_uses_explicit_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "appguard.toml", "[output]\nno_color = true\n");

    appguard(dir.path())
        .args(["--config", "appguard.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("appguard.toml"));
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    appguard(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("appguard"));
}
