//! Command implementations for the dmdiag CLI

pub mod completions;
pub mod list;
pub mod version;
pub mod wtf;

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::graph::ComponentGraph;
use crate::snapshot::SnapshotFile;

/// Read the snapshot at `path` and build its component graph
fn load_graph(path: &Path) -> Result<ComponentGraph> {
    let snapshot = SnapshotFile::open(path)?;
    tracing::debug!(path = %snapshot.path().display(), "building component graph");
    ComponentGraph::from_provider(&snapshot)
}

/// Write rendered lines to stdout
fn print_lines(lines: &[String]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
