//! Operations module
//!
//! High-level operations over one component graph:
//! - ListOperation: filter and list components
//! - DiagnoseOperation: find the root causes of down components
//!
//! Operations take plain options structs and return rendered lines; the
//! commands decide where the lines go.

pub mod diagnose;
pub mod list;

pub use diagnose::{DiagnoseOperation, DiagnoseOptions};
pub use list::{ListOperation, ListOptions};
