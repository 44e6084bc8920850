//! Root-cause report

use console::Style;
use serde::Serialize;

use crate::domain::{Component, DependencyKind, OwningUnit, RootCause, UnitState};
use crate::error::Result;
use crate::graph::{self, ComponentGraph};
use crate::resolver::Diagnosis;

const RULE: &str = "-------------------------------------";

fn heading(text: &str, styled: bool) -> String {
    Style::new()
        .bold()
        .force_styling(styled)
        .apply_to(text)
        .to_string()
}

/// Render the diagnosis of `down` components as text
pub fn render_diagnosis(
    graph: &ComponentGraph,
    down: &[&Component],
    diagnosis: &Diagnosis,
    styled: bool,
) -> Vec<String> {
    let mut lines = Vec::new();

    if down.is_empty() {
        lines.push("No missing dependencies found.".to_string());
    } else {
        lines.push(format!("{} missing dependencies found.", down.len()));
        lines.push(RULE.to_string());
    }

    render_unit_advisories(graph, styled, &mut lines);

    for cycle in &diagnosis.cycles {
        lines.push(heading("Circular dependency found:", styled));
        lines.push(format!(" *{cycle}"));
    }

    render_missing_configurations(diagnosis, styled, &mut lines);
    render_missing_services(down, diagnosis, styled, &mut lines);
    render_other_causes(diagnosis, styled, &mut lines);

    lines
}

/// Units that are resolved but not started, then units not even resolved
fn render_unit_advisories(graph: &ComponentGraph, styled: bool, lines: &mut Vec<String>) {
    let advisories = [
        (UnitState::Resolved, OwningUnit::is_resolved_not_started as fn(&OwningUnit) -> bool),
        (UnitState::Installed, OwningUnit::is_installed_not_resolved),
    ];
    for (state, applies) in advisories {
        let units: Vec<_> = graph.units().filter(|unit| applies(unit)).collect();
        if units.is_empty() {
            continue;
        }
        lines.push(heading(
            &format!(
                "Please note that the following bundles are in the {} state:",
                state.display_name()
            ),
            styled,
        ));
        for unit in units {
            lines.push(format!(" * [{}] {}", unit.id, unit.symbolic_name));
        }
    }
}

fn render_missing_configurations(diagnosis: &Diagnosis, styled: bool, lines: &mut Vec<String>) {
    let mut causes = diagnosis
        .causes_of_kind(&DependencyKind::Configuration)
        .peekable();
    if causes.peek().is_none() {
        return;
    }

    lines.push(heading("The following configuration(s) are missing:", styled));
    for cause in causes {
        lines.push(format!(
            " * {} for bundle {}",
            cause.name,
            cause.owning_unit.as_deref().unwrap_or("unknown")
        ));
    }
}

/// Services no component provides, or down components that need more
fn render_missing_services(
    down: &[&Component],
    diagnosis: &Diagnosis,
    styled: bool,
    lines: &mut Vec<String>,
) {
    let mut causes = diagnosis.causes_of_kind(&DependencyKind::Service).peekable();
    if causes.peek().is_none() {
        return;
    }

    lines.push(heading("The following service(s) are missing:", styled));
    for cause in causes {
        match graph::find_by_name(down.iter().copied(), &cause.name) {
            None => lines.push(format!(
                " * {} is not found in the service registry",
                cause.name
            )),
            Some(component) => {
                lines.push(format!(" * {} and needs:", cause.name));
                for name in component.missing_required() {
                    lines.push(format!("    {name}"));
                }
                lines.push("   to work".to_string());
            }
        }
    }
}

fn render_other_causes(diagnosis: &Diagnosis, styled: bool, lines: &mut Vec<String>) {
    let mut causes = diagnosis.other_causes().peekable();
    if causes.peek().is_none() {
        return;
    }

    lines.push(heading(
        "The following dependencies of other kinds are missing:",
        styled,
    ));
    for cause in causes {
        lines.push(format!(" * {} ({})", cause.name, cause.kind));
    }
}

#[derive(Serialize)]
struct DiagnosisReport<'a> {
    down_components: usize,
    cycles: Vec<Vec<&'a str>>,
    root_causes: Vec<&'a RootCause>,
}

/// Render the diagnosis as pretty-printed JSON
pub fn diagnosis_json(down: &[&Component], diagnosis: &Diagnosis) -> Result<String> {
    let report = DiagnosisReport {
        down_components: down.len(),
        cycles: diagnosis
            .cycles
            .iter()
            .map(|cycle| cycle.names().collect())
            .collect(),
        root_causes: diagnosis.root_causes.iter().collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
