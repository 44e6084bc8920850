//! Dependency cycles found while walking toward a root cause

use std::fmt;

use serde::Serialize;

/// The dependency names on the walk path, closed by the name that was
/// already on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyCycle {
    pub path: Vec<String>,
    pub closing: String,
}

impl DependencyCycle {
    pub fn new(path: Vec<String>, closing: impl Into<String>) -> Self {
        Self {
            path,
            closing: closing.into(),
        }
    }

    /// Every name on the cycle, the closing name last
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.path
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.closing.as_str()))
    }
}

/// Renders as ` -> a -> b -> a`
impl fmt::Display for DependencyCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.names() {
            write!(f, " -> {name}")?;
        }
        Ok(())
    }
}
