//! Diagnose operation
//!
//! Runs the root-cause resolver over every down component and renders the
//! report as text or JSON.

use crate::cli::WtfArgs;
use crate::error::Result;
use crate::graph::ComponentGraph;
use crate::resolver::RootCauseResolver;
use crate::ui::diagnosis::{diagnosis_json, render_diagnosis};

/// Configuration options for diagnose
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnoseOptions {
    pub json: bool,
    pub styled: bool,
}

impl From<&WtfArgs> for DiagnoseOptions {
    fn from(args: &WtfArgs) -> Self {
        Self {
            json: args.json,
            styled: !args.json && console::colors_enabled(),
        }
    }
}

/// High-level diagnose operation
pub struct DiagnoseOperation<'a> {
    graph: &'a ComponentGraph,
}

impl<'a> DiagnoseOperation<'a> {
    pub fn new(graph: &'a ComponentGraph) -> Self {
        Self { graph }
    }

    /// Execute diagnose operation
    pub fn execute(&self, options: &DiagnoseOptions) -> Result<Vec<String>> {
        let resolver = RootCauseResolver::new(self.graph);
        let diagnosis = resolver.compute_root_causes();
        tracing::debug!(
            down = resolver.down_components().len(),
            root_causes = diagnosis.root_causes.len(),
            cycles = diagnosis.cycles.len(),
            "diagnosis computed"
        );

        if options.json {
            let json = diagnosis_json(resolver.down_components(), &diagnosis)?;
            return Ok(vec![json]);
        }

        Ok(render_diagnosis(
            self.graph,
            resolver.down_components(),
            &diagnosis,
            options.styled,
        ))
    }
}
