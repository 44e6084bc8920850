//! Root-cause resolution for down components
//!
//! For every component that is not available, walk its required but
//! unavailable dependencies toward the dependency that is missing on its
//! own account rather than because something further down is missing.
//!
//! ## Walk
//!
//! Dependencies are scanned in declaration order:
//!
//! 1. a missing **configuration** is always a root cause (nothing provides
//!    a configuration, so there is nowhere further to go) and the scan goes
//!    on;
//! 2. a missing target that no down component provides is a root cause
//!    with no known owning unit, and the scan goes on;
//! 3. a target already on the walk path closes a cycle: the cycle is
//!    reported, the current component becomes the root cause and the walk
//!    stops;
//! 4. otherwise the walk moves to the target and the rest of the current
//!    component's dependencies are never looked at.
//!
//! Step 4 means only the first broken chain of a component is followed.
//! A component with several independently broken dependencies reports only
//! the chain behind the first one; other down components may still surface
//! the rest when they are walked themselves.
//!
//! Each step either records causes and stops, or pushes one more
//! dependency onto the path, and a dependency already on the path ends the
//! walk. The walk therefore takes at most as many steps as there are
//! distinct dependencies.

pub mod cycle;

use std::collections::BTreeSet;

use crate::domain::{Component, DependencyKey, DependencyKind, RootCause};
use crate::graph::{self, ComponentGraph};

pub use cycle::DependencyCycle;

/// Causes found by one walk, and the cycle that ended it, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub causes: Vec<RootCause>,
    pub cycle: Option<DependencyCycle>,
}

/// Combined result over all down components
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnosis {
    /// Deduplicated, ordered by name
    pub root_causes: BTreeSet<RootCause>,
    /// In the order they were found
    pub cycles: Vec<DependencyCycle>,
}

impl Diagnosis {
    pub fn causes_of_kind<'a>(
        &'a self,
        kind: &'a DependencyKind,
    ) -> impl Iterator<Item = &'a RootCause> + 'a {
        self.root_causes.iter().filter(move |cause| cause.kind == *kind)
    }

    /// Causes that are neither configurations nor services
    pub fn other_causes(&self) -> impl Iterator<Item = &RootCause> {
        self.root_causes.iter().filter(|cause| {
            !matches!(
                cause.kind,
                DependencyKind::Configuration | DependencyKind::Service
            )
        })
    }
}

/// Resolves root causes against one component graph
pub struct RootCauseResolver<'a> {
    graph: &'a ComponentGraph,
    down: Vec<&'a Component>,
}

impl<'a> RootCauseResolver<'a> {
    pub fn new(graph: &'a ComponentGraph) -> Self {
        Self {
            graph,
            down: graph.down_components(),
        }
    }

    /// Down components in graph order
    pub fn down_components(&self) -> &[&'a Component] {
        &self.down
    }

    /// Down component providing `qualified_name`
    ///
    /// Only down components are candidates: an available provider cannot be
    /// the reason a dependency is missing.
    pub fn find_down(&self, qualified_name: &str) -> Option<&'a Component> {
        graph::find_by_name(self.down.iter().copied(), qualified_name)
    }

    /// Walk from `component` to the root cause(s) of its failure
    ///
    /// `visited` is the dependency path already walked; pass an empty path
    /// for a fresh walk.
    pub fn resolve_root(
        &self,
        component: &'a Component,
        mut visited: Vec<DependencyKey>,
    ) -> Resolution {
        let mut current = component;

        'walk: loop {
            let owning_unit = self.graph.unit_name(current).map(str::to_string);
            let mut causes = Vec::new();
            let mut down_deps = 0usize;

            for dep in current.dependencies.iter().filter(|d| d.is_unavailable_required()) {
                down_deps += 1;

                if dep.kind == DependencyKind::Configuration {
                    tracing::debug!(component = %current.name, pid = %dep.name, "missing configuration");
                    causes.push(RootCause::new(
                        &dep.name,
                        DependencyKind::Configuration,
                        owning_unit.clone(),
                    ));
                    continue;
                }

                let Some(target) = self.find_down(&dep.name) else {
                    tracing::debug!(component = %current.name, dependency = %dep.name, "no provider in registry");
                    causes.push(RootCause::new(&dep.name, dep.kind.clone(), None));
                    continue;
                };

                let key = dep.key();
                if visited.contains(&key) {
                    let path = visited.into_iter().map(|k| k.name).collect();
                    let cycle = DependencyCycle::new(path, key.name);
                    tracing::debug!(cycle = %cycle, "circular dependency");
                    causes.push(RootCause::new(
                        &current.name,
                        DependencyKind::Service,
                        owning_unit,
                    ));
                    return Resolution {
                        causes,
                        cycle: Some(cycle),
                    };
                }

                tracing::trace!(from = %current.name, to = %target.name, "following dependency");
                visited.push(key);
                current = target;
                continue 'walk;
            }

            if down_deps > 0 && causes.is_empty() {
                causes.push(RootCause::new(
                    &current.name,
                    DependencyKind::Service,
                    owning_unit,
                ));
            }

            return Resolution {
                causes,
                cycle: None,
            };
        }
    }

    /// Union of the root causes of every down component
    pub fn compute_root_causes(&self) -> Diagnosis {
        let mut diagnosis = Diagnosis::default();
        for &component in &self.down {
            let resolution = self.resolve_root(component, Vec::new());
            diagnosis.root_causes.extend(resolution.causes);
            diagnosis.cycles.extend(resolution.cycle);
        }
        tracing::debug!(
            down = self.down.len(),
            root_causes = diagnosis.root_causes.len(),
            cycles = diagnosis.cycles.len(),
            "computed root causes"
        );
        diagnosis
    }
}
