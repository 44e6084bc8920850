//! Component selection
//!
//! Decides which components a listing shows. Component ids are a hard
//! restriction; the service predicate and the name patterns are OR'ed.

pub mod pattern;
pub mod predicate;

use crate::domain::{Component, OwningUnit};

pub use pattern::NamePattern;
pub use predicate::{PropertyFilter, ServicePredicate};

/// Whether `component` may be displayed under the given filters
///
/// - a non-empty `ids` list rejects every component not in it;
/// - with neither a predicate nor patterns, everything else is accepted;
/// - otherwise the component is accepted if the predicate matches its
///   service properties OR any pattern (after its own `!`) matches its
///   implementation class name.
pub fn may_display(
    component: &Component,
    ids: &[u64],
    services: Option<&dyn ServicePredicate>,
    patterns: &[NamePattern],
) -> bool {
    if !ids.is_empty() && !ids.contains(&component.id) {
        return false;
    }

    if services.is_none() && patterns.is_empty() {
        return true;
    }

    services_match(component, services) || class_name_matches(&component.class_name, patterns)
}

/// Only components that provide services are checked against the predicate
fn services_match(component: &Component, services: Option<&dyn ServicePredicate>) -> bool {
    match services {
        Some(predicate) if !component.services.is_empty() => {
            predicate.matches(&component.service_properties())
        }
        _ => false,
    }
}

fn class_name_matches(class_name: &str, patterns: &[NamePattern]) -> bool {
    patterns.iter().any(|pattern| pattern.matches(class_name))
}

/// Filters applied to components before they are listed
#[derive(Default)]
pub struct ComponentFilter {
    pub ids: Vec<u64>,
    pub services: Option<Box<dyn ServicePredicate>>,
    pub patterns: Vec<NamePattern>,
}

impl ComponentFilter {
    pub fn may_display(&self, component: &Component) -> bool {
        let accepted = may_display(
            component,
            &self.ids,
            self.services.as_deref(),
            &self.patterns,
        );
        if !accepted {
            tracing::trace!(id = component.id, name = %component.name, "component filtered out");
        }
        accepted
    }
}

/// Owning units selected by id or symbolic name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitFilter {
    entries: Vec<String>,
}

impl UnitFilter {
    pub fn new<S: AsRef<str>>(entries: &[S]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|e| e.as_ref().trim().to_string())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// Numeric entries match the unit id, all others the symbolic name
    pub fn matches(&self, unit: &OwningUnit) -> bool {
        self.entries.is_empty()
            || self.entries.iter().any(|entry| match entry.parse::<u64>() {
                Ok(id) => id == unit.id,
                Err(_) => *entry == unit.symbolic_name,
            })
    }
}
