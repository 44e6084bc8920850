//! Tests for the wtf command
//!
//! This module tests:
//! - Root causes behind chains of down components
//! - Missing configurations attributed to their owning unit
//! - Unit state advisories
//! - Cycle reporting
//! - JSON output

mod common;

use common::{CYCLE_SNAPSHOT, GREETER_SNAPSHOT, TestSnapshot};
use predicates::prelude::*;

const RULE: &str = "-------------------------------------";

const CHAIN_SNAPSHOT: &str = r#"
bundles:
  - id: 1
    symbolic_name: org.example.chain
  - id: 2
    symbolic_name: org.example.legacy
    state: installed
components:
  - id: 0
    bundle: 1
    name: A
    state: unregistered
    dependencies:
      - { name: B, kind: service, state: unavailable_required }
  - id: 1
    bundle: 1
    name: B
    state: unregistered
    dependencies:
      - { name: C, kind: service, state: unavailable_required }
  - id: 2
    bundle: 1
    name: C
    state: unregistered
    dependencies:
      - { name: X, kind: service, state: unavailable_required }
      - { name: Y, kind: service, state: unavailable_optional }
"#;

#[test]
fn test_wtf_missing_configuration() {
    let snapshot = TestSnapshot::new(GREETER_SNAPSHOT);

    let expected = [
        "2 missing dependencies found.",
        RULE,
        "Please note that the following bundles are in the RESOLVED state:",
        " * [3] org.example.store",
        "The following configuration(s) are missing:",
        " * org.example.store.cfg for bundle org.example.store",
        "",
    ]
    .join("\n");

    snapshot.cmd().arg("wtf").assert().success().stdout(expected);
}

#[test]
fn test_wtf_chain_reports_only_the_missing_service() {
    let snapshot = TestSnapshot::new(CHAIN_SNAPSHOT);

    let expected = [
        "3 missing dependencies found.",
        RULE,
        "Please note that the following bundles are in the INSTALLED state:",
        " * [2] org.example.legacy",
        "The following service(s) are missing:",
        " * X is not found in the service registry",
        "",
    ]
    .join("\n");

    snapshot.cmd().arg("wtf").assert().success().stdout(expected);
}

#[test]
fn test_wtf_cycle() {
    let snapshot = TestSnapshot::new(CYCLE_SNAPSHOT);

    snapshot
        .cmd()
        .arg("diagnose")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Circular dependency found:\n * -> B -> C -> A -> B\n",
        ))
        .stdout(predicate::str::contains(" * A and needs:\n    B\n   to work\n"))
        .stdout(predicate::str::contains(" * C and needs:\n    A\n   to work\n"));
}

#[test]
fn test_wtf_cycles_stay_off_stderr() {
    let snapshot = TestSnapshot::new(CYCLE_SNAPSHOT);

    snapshot
        .cmd()
        .arg("wtf")
        .assert()
        .success()
        .stdout(predicate::str::contains("Circular dependency found:").count(3))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_wtf_nothing_missing() {
    let snapshot = TestSnapshot::new(
        "bundles:\n  - { id: 1, symbolic_name: org.example.app }\n\
         components:\n  - { id: 0, bundle: 1, name: A, state: registered }\n",
    );

    snapshot
        .cmd()
        .arg("wtf")
        .assert()
        .success()
        .stdout("No missing dependencies found.\n");
}

#[test]
fn test_wtf_json() {
    let snapshot = TestSnapshot::new(CHAIN_SNAPSHOT);

    let output = snapshot.cmd().args(["wtf", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["down_components"], 3);
    assert_eq!(value["cycles"], serde_json::json!([]));
    assert_eq!(
        value["root_causes"],
        serde_json::json!([{ "name": "X", "kind": "service", "owning_unit": null }])
    );
}

#[test]
fn test_wtf_output_is_deterministic() {
    let snapshot = TestSnapshot::new(CYCLE_SNAPSHOT);

    let first = snapshot.cmd().arg("wtf").output().unwrap();
    let second = snapshot.cmd().arg("wtf").output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
