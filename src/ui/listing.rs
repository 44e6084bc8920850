//! Component listing
//!
//! Components are printed under a header for their owning unit; the header
//! is repeated whenever the unit changes between two consecutive
//! components.

use console::Style;

use super::compact::{compact_name, compact_state};
use crate::domain::{Component, Dependency, OwningUnit};
use crate::graph::ComponentGraph;

/// How the listing is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub compact: bool,
    pub hide_deps: bool,
    /// Only show unavailable dependencies
    pub not_available_only: bool,
    pub stats: bool,
    pub styled: bool,
}

/// Formatter trait for one listing mode
pub trait ListFormatter {
    fn unit_header(&self, unit: &OwningUnit) -> String;

    /// Lines for a component; `deps` is `None` when dependencies are hidden
    fn component_lines(&self, component: &Component, deps: Option<&[&Dependency]>) -> Vec<String>;
}

/// `name state` per line, dependencies indented below their component
pub struct VerboseFormatter {
    pub styled: bool,
}

impl ListFormatter for VerboseFormatter {
    fn unit_header(&self, unit: &OwningUnit) -> String {
        let header = format!("[{}] {}", unit.id, unit.symbolic_name);
        Style::new()
            .bold()
            .force_styling(self.styled)
            .apply_to(header)
            .to_string()
    }

    fn component_lines(&self, component: &Component, deps: Option<&[&Dependency]>) -> Vec<String> {
        let mut lines = vec![format!(
            " [{}] {} {}",
            component.id,
            component.name,
            component.state.display_name()
        )];
        for dep in deps.unwrap_or_default() {
            lines.push(format!(
                "    {} {} {}",
                dep.name,
                dep.kind,
                dep.state.display_name()
            ));
        }
        lines
    }
}

/// One line per component with compacted names and states
pub struct CompactFormatter {
    pub styled: bool,
}

impl ListFormatter for CompactFormatter {
    fn unit_header(&self, unit: &OwningUnit) -> String {
        let header = format!("[{}] {}", unit.id, compact_name(&unit.symbolic_name));
        Style::new()
            .bold()
            .force_styling(self.styled)
            .apply_to(header)
            .to_string()
    }

    fn component_lines(&self, component: &Component, deps: Option<&[&Dependency]>) -> Vec<String> {
        let mut line = format!(
            " [{}] {} {}",
            component.id,
            compact_name(&component.name),
            compact_state(component.state.display_name())
        );
        if let Some(deps) = deps.filter(|deps| !deps.is_empty()) {
            let inline: Vec<String> = deps
                .iter()
                .map(|dep| {
                    format!(
                        "{} {} {}",
                        compact_name(&dep.name),
                        compact_state(dep.kind.as_str()),
                        compact_state(dep.state.display_name())
                    )
                })
                .collect();
            line.push('(');
            line.push_str(&inline.join(" "));
            line.push(')');
        }
        vec![line]
    }
}

/// Render `components` (already filtered, in graph order)
pub fn render_component_list<'a, I>(
    graph: &ComponentGraph,
    components: I,
    options: &ListingOptions,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a Component>,
{
    let formatter: Box<dyn ListFormatter> = if options.compact {
        Box::new(CompactFormatter {
            styled: options.styled,
        })
    } else {
        Box::new(VerboseFormatter {
            styled: options.styled,
        })
    };

    let mut lines = Vec::new();
    let mut last_unit = None;
    let mut component_count = 0usize;
    let mut dependency_count = 0usize;

    for component in components {
        if last_unit != Some(component.bundle) {
            last_unit = Some(component.bundle);
            if let Some(unit) = graph.unit(component.bundle) {
                lines.push(formatter.unit_header(unit));
            }
        }
        component_count += 1;

        let deps: Option<Vec<&Dependency>> = (!options.hide_deps).then(|| {
            component
                .dependencies
                .iter()
                .filter(|dep| !options.not_available_only || dep.state.is_unavailable())
                .collect()
        });
        dependency_count += deps.as_ref().map_or(0, Vec::len);

        lines.extend(formatter.component_lines(component, deps.as_deref()));
    }

    if options.stats {
        let owning_units = graph
            .units()
            .filter(|unit| graph.all_components().iter().any(|c| c.bundle == unit.id))
            .count();
        lines.push("Statistics:".to_string());
        lines.push(format!(" - Owning units: {owning_units}"));
        lines.push(format!(" - Components: {component_count}"));
        if !options.hide_deps {
            lines.push(format!(" - Dependencies: {dependency_count}"));
        }
    }

    lines
}
