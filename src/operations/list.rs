//! List operation
//!
//! Encapsulates the listing mode: select components with the matcher and
//! the owning unit filter, then render them.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::graph::ComponentGraph;
use crate::matcher::{ComponentFilter, NamePattern, PropertyFilter, ServicePredicate, UnitFilter};
use crate::ui::listing::{ListingOptions, render_component_list};

/// Configuration options for list
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub component_ids: Vec<u64>,
    pub services: Option<String>,
    pub components: Vec<String>,
    pub bundles: Vec<String>,
    pub hide_deps: bool,
    pub compact: bool,
    pub not_available_only: bool,
    pub stats: bool,
    pub styled: bool,
}

impl From<&ListArgs> for ListOptions {
    fn from(args: &ListArgs) -> Self {
        Self {
            component_ids: args.component_ids.clone(),
            services: args
                .services
                .clone()
                .filter(|services| !services.trim().is_empty()),
            components: args
                .components
                .iter()
                .map(|pattern| pattern.trim().to_string())
                .filter(|pattern| !pattern.is_empty())
                .collect(),
            bundles: args.bundle_ids.clone(),
            hide_deps: args.nodeps,
            compact: args.compact,
            not_available_only: args.notavail,
            stats: args.stats,
            styled: console::colors_enabled(),
        }
    }
}

impl ListOptions {
    fn listing(&self) -> ListingOptions {
        ListingOptions {
            compact: self.compact,
            hide_deps: self.hide_deps,
            not_available_only: self.not_available_only,
            stats: self.stats,
            styled: self.styled,
        }
    }

    /// Compile the services filter and name patterns
    ///
    /// Malformed input fails here, before anything is rendered.
    fn component_filter(&self) -> Result<ComponentFilter> {
        let services = self
            .services
            .as_deref()
            .map(PropertyFilter::parse)
            .transpose()?
            .map(|filter| Box::new(filter) as Box<dyn ServicePredicate>);
        Ok(ComponentFilter {
            ids: self.component_ids.clone(),
            services,
            patterns: NamePattern::parse_all(&self.components)?,
        })
    }
}

/// High-level list operation
pub struct ListOperation<'a> {
    graph: &'a ComponentGraph,
}

impl<'a> ListOperation<'a> {
    pub fn new(graph: &'a ComponentGraph) -> Self {
        Self { graph }
    }

    /// Execute list operation
    pub fn execute(&self, options: &ListOptions) -> Result<Vec<String>> {
        let filter = options.component_filter()?;
        let units = UnitFilter::new(&options.bundles);
        Ok(self.list_and_filter(&filter, &units, &options.listing()))
    }

    /// Render the components accepted by `filter` whose unit passes `units`
    pub fn list_and_filter(
        &self,
        filter: &ComponentFilter,
        units: &UnitFilter,
        listing: &ListingOptions,
    ) -> Vec<String> {
        let selected = self.graph.all_components().iter().filter(|component| {
            filter.may_display(component)
                && self
                    .graph
                    .unit(component.bundle)
                    .is_some_and(|unit| units.matches(unit))
                && (!listing.not_available_only || component.is_down())
        });
        render_component_list(self.graph, selected, listing)
    }
}
