//! Presentation layer
//!
//! Turns graph data and diagnoses into printable lines:
//! - compact: compact forms of names and states
//! - listing: the component listing, verbose or compact, with statistics
//! - diagnosis: the root-cause report as text or JSON
//!
//! Renderers return lines instead of printing so commands and tests see
//! the same output.

pub mod compact;
pub mod diagnosis;
pub mod listing;
