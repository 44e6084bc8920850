//! Component graph model
//!
//! A read-only, deterministically ordered view over one registry snapshot.
//! Components are sorted by owning unit id; components of the same unit
//! keep the order the registry reported them in.
//!
//! Dependencies are not linked to their targets. A target is found by
//! name when needed through [`find_by_name`], over all components or any
//! subset of them.

pub mod qualified_name;

use std::collections::{BTreeMap, HashSet};

use crate::domain::{Component, OwningUnit};
use crate::error::{self, Result};
use crate::snapshot::RegistryProvider;

pub use qualified_name::QualifiedName;

/// All components and owning units of a snapshot
#[derive(Debug, Clone, Default)]
pub struct ComponentGraph {
    units: BTreeMap<u64, OwningUnit>,
    components: Vec<Component>,
}

impl ComponentGraph {
    /// Build the graph, validating that every component belongs to a
    /// declared unit and that ids are unique
    pub fn new(units: Vec<OwningUnit>, mut components: Vec<Component>) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        for unit in units {
            let id = unit.id;
            if by_id.insert(id, unit).is_some() {
                return Err(error::snapshot::invalid(format!("duplicate bundle id {id}")));
            }
        }

        let mut seen = HashSet::new();
        for component in &components {
            if !seen.insert(component.id) {
                return Err(error::snapshot::invalid(format!(
                    "duplicate component id {}",
                    component.id
                )));
            }
            if !by_id.contains_key(&component.bundle) {
                return Err(error::snapshot::invalid(format!(
                    "component {} ({}) references unknown bundle {}",
                    component.id, component.name, component.bundle
                )));
            }
        }

        // Stable: components of one unit keep their arrival order
        components.sort_by_key(|component| component.bundle);

        tracing::debug!(
            units = by_id.len(),
            components = components.len(),
            "built component graph"
        );

        Ok(Self {
            units: by_id,
            components,
        })
    }

    /// Take a snapshot from the provider and build the graph from it
    pub fn from_provider(provider: &dyn RegistryProvider) -> Result<Self> {
        Self::new(provider.list_units()?, provider.list_components()?)
    }

    /// Owning units ordered by id
    pub fn units(&self) -> impl Iterator<Item = &OwningUnit> {
        self.units.values()
    }

    pub fn unit(&self, id: u64) -> Option<&OwningUnit> {
        self.units.get(&id)
    }

    /// Symbolic name of the unit owning `component`
    pub fn unit_name(&self, component: &Component) -> Option<&str> {
        self.unit(component.bundle)
            .map(|unit| unit.symbolic_name.as_str())
    }

    pub fn all_components(&self) -> &[Component] {
        &self.components
    }

    /// Components that are not available, in graph order
    pub fn down_components(&self) -> Vec<&Component> {
        self.components.iter().filter(|c| c.is_down()).collect()
    }

}

/// First of `candidates` whose declaration name satisfies `qualified_name`
pub fn find_by_name<'a, I>(candidates: I, qualified_name: &str) -> Option<&'a Component>
where
    I: IntoIterator<Item = &'a Component>,
{
    let query = QualifiedName::parse(qualified_name);
    candidates
        .into_iter()
        .find(|component| query.is_satisfied_by(&QualifiedName::parse(&component.name)))
}
