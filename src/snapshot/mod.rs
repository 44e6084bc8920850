//! Registry snapshots
//!
//! The host captures its dependency manager registry once and hands it to
//! dmdiag as a snapshot. Everything downstream reads that snapshot only;
//! nothing is observed live.
//!
//! ## Document format
//!
//! ```yaml
//! bundles:
//!   - id: 3
//!     symbolic_name: org.example.greeter
//!     state: active
//! components:
//!   - id: 0
//!     bundle: 3
//!     name: org.example.Greeter(lang=en)
//!     class_name: org.example.impl.GreeterImpl
//!     services: [org.example.Greeter]
//!     properties: { lang: en }
//!     state: unregistered
//!     dependencies:
//!       - name: org.example.greeter.cfg
//!         kind: configuration
//!         state: unavailable_required
//! ```
//!
//! JSON documents are accepted as well since JSON is a subset of YAML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{Component, OwningUnit};
use crate::error::{self, Result};

/// Source of the components and owning units to inspect
pub trait RegistryProvider {
    /// All owning units, in the order the registry enumerates them
    fn list_units(&self) -> Result<Vec<OwningUnit>>;

    /// All components across all units, in arrival order
    fn list_components(&self) -> Result<Vec<Component>>;
}

/// An in-memory registry snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub bundles: Vec<OwningUnit>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Snapshot {
    /// Parse a snapshot from an in-memory YAML (or JSON) document
    #[cfg(test)]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| error::snapshot::parse_failed("<inline>", e.to_string()))
    }

    /// Read and parse a snapshot document from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(error::snapshot::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| error::snapshot::read_failed(path.display().to_string(), e.to_string()))?;

        serde_yaml::from_str(&content)
            .map_err(|e| error::snapshot::parse_failed(path.display().to_string(), e.to_string()))
    }
}

impl RegistryProvider for Snapshot {
    fn list_units(&self) -> Result<Vec<OwningUnit>> {
        Ok(self.bundles.clone())
    }

    fn list_components(&self) -> Result<Vec<Component>> {
        Ok(self.components.clone())
    }
}

/// A snapshot document on disk, read once when opened
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
    snapshot: Snapshot,
}

impl SnapshotFile {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = Snapshot::load(&path)?;
        tracing::debug!(
            path = %path.display(),
            units = snapshot.bundles.len(),
            components = snapshot.components.len(),
            "loaded snapshot"
        );
        Ok(Self { path, snapshot })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistryProvider for SnapshotFile {
    fn list_units(&self) -> Result<Vec<OwningUnit>> {
        self.snapshot.list_units()
    }

    fn list_components(&self) -> Result<Vec<Component>> {
        self.snapshot.list_components()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyKind;
    use crate::domain::component::ComponentState;
    use crate::error::DmError;
    use tempfile::TempDir;

    const SAMPLE: &str = r"
bundles:
  - id: 3
    symbolic_name: org.example.greeter
  - id: 1
    symbolic_name: org.example.store
    state: resolved
components:
  - id: 0
    bundle: 3
    name: org.example.Greeter(lang=en)
    class_name: org.example.impl.GreeterImpl
    services: [org.example.Greeter]
    properties: { lang: en }
    state: unregistered
    dependencies:
      - name: org.example.greeter.cfg
        kind: configuration
        state: unavailable_required
";

    #[test]
    fn test_from_yaml_parses_units_and_components() {
        let snapshot = Snapshot::from_yaml(SAMPLE).unwrap();
        assert_eq!(snapshot.bundles.len(), 2);
        assert_eq!(snapshot.components.len(), 1);
        let component = &snapshot.components[0];
        assert_eq!(component.state, ComponentState::Unregistered);
        assert_eq!(component.dependencies[0].kind, DependencyKind::Configuration);
    }

    #[test]
    fn test_from_yaml_accepts_json() {
        let json = r#"{"bundles": [{"id": 1, "symbolic_name": "a"}], "components": []}"#;
        let snapshot = Snapshot::from_yaml(json).unwrap();
        assert_eq!(snapshot.bundles[0].symbolic_name, "a");
    }

    #[test]
    fn test_empty_document_is_an_empty_snapshot() {
        let snapshot = Snapshot::from_yaml("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_from_yaml_reports_parse_failure() {
        let result = Snapshot::from_yaml("components: [unclosed");
        assert!(matches!(result, Err(DmError::SnapshotParseFailed { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Snapshot::load(&temp.path().join("missing.yaml"));
        assert!(matches!(result, Err(DmError::SnapshotNotFound { .. })));
    }

    #[test]
    fn test_load_reports_path_on_parse_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yaml");
        std::fs::write(&path, "components: [unclosed").unwrap();

        match Snapshot::load(&path) {
            Err(DmError::SnapshotParseFailed { path: reported, .. }) => {
                assert!(reported.ends_with("broken.yaml"));
            }
            other => panic!("Expected SnapshotParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_file_provides_components() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("snapshot.yaml");
        std::fs::write(&path, SAMPLE).unwrap();

        let file = SnapshotFile::open(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.list_units().unwrap().len(), 2);
        assert_eq!(file.list_components().unwrap()[0].id, 0);
    }
}
