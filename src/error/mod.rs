//! Error types and handling for dmdiag
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by domain:
//! - [`snapshot`]: loading and validating snapshot documents
//! - [`filter`]: service filters and component name patterns

pub mod filter;
pub mod snapshot;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dmdiag operations
#[derive(Error, Diagnostic, Debug)]
pub enum DmError {
    // Snapshot errors
    #[error("Snapshot file not found: {path}")]
    #[diagnostic(
        code(dmdiag::snapshot::not_found),
        help("Pass a snapshot with --snapshot or set DMDIAG_SNAPSHOT")
    )]
    SnapshotNotFound { path: String },

    #[error("Failed to read snapshot file: {path}: {reason}")]
    #[diagnostic(code(dmdiag::snapshot::read_failed))]
    SnapshotReadFailed { path: String, reason: String },

    #[error("Failed to parse snapshot: {path}: {reason}")]
    #[diagnostic(
        code(dmdiag::snapshot::parse_failed),
        help("Snapshots are YAML (or JSON) documents with `bundles` and `components` lists")
    )]
    SnapshotParseFailed { path: String, reason: String },

    #[error("Invalid snapshot: {message}")]
    #[diagnostic(code(dmdiag::snapshot::invalid))]
    InvalidSnapshot { message: String },

    // Filter errors
    #[error("Invalid services filter '{filter}': {reason}")]
    #[diagnostic(
        code(dmdiag::filter::invalid_services),
        help("Use comma separated key=value terms, e.g. objectClass=org.example.Greeter,lang=en")
    )]
    InvalidServiceFilter { filter: String, reason: String },

    #[error("Invalid component pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(dmdiag::filter::invalid_pattern),
        help("Component patterns are regular expressions matched against the whole class name")
    )]
    InvalidComponentPattern { pattern: String, reason: String },

    // Output errors
    #[error("Failed to render output: {message}")]
    #[diagnostic(code(dmdiag::output::render_failed))]
    RenderFailed { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(dmdiag::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DmError {
    fn from(err: std::io::Error) -> Self {
        DmError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DmError {
    fn from(err: serde_json::Error) -> Self {
        DmError::RenderFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DmError>;
