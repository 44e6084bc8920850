//! Owning unit ("bundle") domain types

use serde::{Deserialize, Serialize};

/// Lifecycle state of an owning unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitState {
    Installed,
    Resolved,
    Starting,
    #[default]
    Active,
    Stopping,
    Uninstalled,
}

impl UnitState {
    pub fn display_name(self) -> &'static str {
        match self {
            UnitState::Installed => "INSTALLED",
            UnitState::Resolved => "RESOLVED",
            UnitState::Starting => "STARTING",
            UnitState::Active => "ACTIVE",
            UnitState::Stopping => "STOPPING",
            UnitState::Uninstalled => "UNINSTALLED",
        }
    }
}

/// The deployable grouping a component belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwningUnit {
    pub id: u64,
    pub symbolic_name: String,
    #[serde(default)]
    pub state: UnitState,
    /// Fragments attach to a host and never start on their own
    #[serde(default)]
    pub fragment: bool,
}

impl OwningUnit {
    /// Resolved but never started, ignoring fragments which cannot start
    pub fn is_resolved_not_started(&self) -> bool {
        self.state == UnitState::Resolved && !self.fragment
    }

    pub fn is_installed_not_resolved(&self) -> bool {
        self.state == UnitState::Installed
    }
}

// Builders used by tests
#[cfg(test)]
impl OwningUnit {
    pub fn new(id: u64, symbolic_name: impl Into<String>) -> Self {
        Self {
            id,
            symbolic_name: symbolic_name.into(),
            state: UnitState::Active,
            fragment: false,
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: UnitState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn as_fragment(mut self) -> Self {
        self.fragment = true;
        self
    }
}
