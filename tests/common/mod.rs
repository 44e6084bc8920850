//! Common test utilities for dmdiag integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Owning units and components shared by most tests
///
/// ```text
/// [1] org.example.api      Log (registered)
/// [2] org.example.greeter  Greeter -> Store (required, missing) -> Log (available)
/// [3] org.example.store    Store -> org.example.store.cfg (missing)   (unit RESOLVED)
/// ```
#[allow(dead_code)]
pub const GREETER_SNAPSHOT: &str = r#"
bundles:
  - id: 1
    symbolic_name: org.example.api
  - id: 2
    symbolic_name: org.example.greeter
  - id: 3
    symbolic_name: org.example.store
    state: resolved
components:
  - id: 0
    bundle: 2
    name: org.example.Greeter
    class_name: org.example.impl.GreeterImpl
    services: [org.example.Greeter]
    properties:
      lang: en
    state: unregistered
    dependencies:
      - name: org.example.Store
        kind: service
        state: unavailable_required
      - name: org.example.Log
        kind: service
        state: available
  - id: 1
    bundle: 3
    name: org.example.Store
    class_name: org.example.impl.StoreImpl
    services: [org.example.Store]
    state: waiting_for_required
    dependencies:
      - name: org.example.store.cfg
        kind: configuration
        state: unavailable_required
  - id: 2
    bundle: 1
    name: org.example.Log
    class_name: org.example.impl.LogImpl
    services: [org.example.Log]
    state: registered
"#;

/// Three components waiting on each other
#[allow(dead_code)]
pub const CYCLE_SNAPSHOT: &str = r#"
bundles:
  - id: 1
    symbolic_name: org.example.ring
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
      - { name: A, kind: service, state: unavailable_required }
"#;

/// A temporary directory holding a snapshot document
pub struct TestSnapshot {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the snapshot file
    pub path: PathBuf,
}

impl TestSnapshot {
    /// Write `content` as `dm-snapshot.yaml` in a fresh temp directory
    pub fn new(content: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("dm-snapshot.yaml");
        std::fs::write(&path, content).expect("Failed to write snapshot");
        Self { temp, path }
    }

    /// Command running dmdiag against this snapshot
    pub fn cmd(&self) -> Command {
        let mut cmd = dmdiag_cmd();
        cmd.arg("--snapshot").arg(&self.path);
        cmd
    }
}

/// dmdiag command with the environment it reads cleared
#[allow(deprecated)]
pub fn dmdiag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dmdiag").unwrap();
    for var in [
        "DMDIAG_SNAPSHOT",
        "DMDIAG_COMPACT",
        "DMDIAG_SERVICES",
        "DMDIAG_COMPONENTS",
        "DMDIAG_LOG",
        "CLICOLOR_FORCE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}
