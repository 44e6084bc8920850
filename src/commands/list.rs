//! List command implementation
//!
//! Lists the components of a snapshot, grouped by owning unit, with their
//! dependencies.

use std::path::Path;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::operations::{ListOperation, ListOptions};

/// Run list command
pub fn run(snapshot: &Path, args: ListArgs) -> Result<()> {
    let options = ListOptions::from(&args);
    let graph = super::load_graph(snapshot)?;
    let lines = ListOperation::new(&graph).execute(&options)?;
    super::print_lines(&lines)
}
