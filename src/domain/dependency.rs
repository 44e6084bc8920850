//! Dependency domain types
//!
//! A dependency points at its target by name only. The target component is
//! looked up by qualified name when needed (see [`crate::graph`]), never
//! stored as a reference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a dependency requires
///
/// Service and configuration are the kinds the diagnosis treats specially;
/// every other kind is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DependencyKind {
    Service,
    Configuration,
    Bundle,
    Resource,
    Other(String),
}

impl DependencyKind {
    pub fn as_str(&self) -> &str {
        match self {
            DependencyKind::Service => "service",
            DependencyKind::Configuration => "configuration",
            DependencyKind::Bundle => "bundle",
            DependencyKind::Resource => "resource",
            DependencyKind::Other(kind) => kind,
        }
    }
}

impl From<String> for DependencyKind {
    fn from(kind: String) -> Self {
        match kind.to_ascii_lowercase().as_str() {
            "service" => DependencyKind::Service,
            "configuration" => DependencyKind::Configuration,
            "bundle" => DependencyKind::Bundle,
            "resource" => DependencyKind::Resource,
            _ => DependencyKind::Other(kind),
        }
    }
}

impl From<DependencyKind> for String {
    fn from(kind: DependencyKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a dependency is currently satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyState {
    Available,
    UnavailableRequired,
    UnavailableOptional,
}

impl DependencyState {
    pub fn display_name(self) -> &'static str {
        match self {
            DependencyState::Available => "available",
            DependencyState::UnavailableRequired => "unavailable required",
            DependencyState::UnavailableOptional => "unavailable optional",
        }
    }

    pub fn is_unavailable(self) -> bool {
        !matches!(self, DependencyState::Available)
    }
}

/// A declared requirement of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub kind: DependencyKind,
    pub state: DependencyState,
}

impl Dependency {
    pub fn is_unavailable_required(&self) -> bool {
        self.state == DependencyState::UnavailableRequired
    }

    pub fn key(&self) -> DependencyKey {
        DependencyKey {
            name: self.name.clone(),
            kind: self.kind.clone(),
        }
    }
}

/// Identity of a dependency on a traversal path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyKey {
    pub name: String,
    pub kind: DependencyKind,
}

// Used by tests
#[cfg(test)]
impl Dependency {
    pub fn new(name: impl Into<String>, kind: DependencyKind, state: DependencyState) -> Self {
        Self {
            name: name.into(),
            kind,
            state,
        }
    }
}
