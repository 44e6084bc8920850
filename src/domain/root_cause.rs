//! Root causes deduced by the resolver

use serde::Serialize;

use super::dependency::DependencyKind;

/// The missing dependency that explains why a chain of components is down
///
/// Ordering is by name first so a `BTreeSet` of causes prints in a stable,
/// alphabetical order. Equal (name, kind, unit) triples are the same cause.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RootCause {
    pub name: String,
    pub kind: DependencyKind,
    /// Symbolic name of the owning unit, unknown when nothing in the
    /// registry provides the missing name
    pub owning_unit: Option<String>,
}

impl RootCause {
    pub fn new(name: impl Into<String>, kind: DependencyKind, owning_unit: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            owning_unit,
        }
    }
}
