//! Wtf command implementation
//!
//! Explains why components are down.

use std::path::Path;

use crate::cli::WtfArgs;
use crate::error::Result;
use crate::operations::{DiagnoseOperation, DiagnoseOptions};

/// Run wtf command
pub fn run(snapshot: &Path, args: WtfArgs) -> Result<()> {
    let options = DiagnoseOptions::from(&args);
    let graph = super::load_graph(snapshot)?;
    let lines = DiagnoseOperation::new(&graph).execute(&options)?;
    super::print_lines(&lines)
}
