//! Component domain types

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::dependency::Dependency;

/// Service property key listing the service names a component provides
pub const OBJECT_CLASS: &str = "objectClass";

/// Lifecycle state of a component as reported by the registry
///
/// Only two of these are "available"; the rest are kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentState {
    Unregistered,
    Registered,
    InstantiatedAndWaitingForRequired,
    WaitingForRequired,
    TrackingOptional,
}

impl ComponentState {
    pub fn display_name(self) -> &'static str {
        match self {
            ComponentState::Unregistered => "unregistered",
            ComponentState::Registered => "registered",
            ComponentState::InstantiatedAndWaitingForRequired => {
                "instantiated and waiting for required"
            }
            ComponentState::WaitingForRequired => "waiting for required",
            ComponentState::TrackingOptional => "tracking optional",
        }
    }

    /// Registered components (including those only tracking optional deps)
    pub fn is_available(self) -> bool {
        matches!(
            self,
            ComponentState::Registered | ComponentState::TrackingOptional
        )
    }
}

/// A service property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl PropertyValue {
    /// String equality, or membership for list values
    pub fn matches(&self, expected: &str) -> bool {
        match self {
            PropertyValue::List(values) => values.iter().any(|v| v == expected),
            other => other.to_string() == expected,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Boolean(v) => write!(f, "{v}"),
            PropertyValue::Integer(v) => write!(f, "{v}"),
            PropertyValue::Float(v) => write!(f, "{v}"),
            PropertyValue::Text(v) => f.write_str(v),
            PropertyValue::List(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// A dependency manager component captured in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: u64,
    /// Id of the owning unit
    pub bundle: u64,
    /// Declaration name, e.g. `org.example.Greeter(lang=en)`
    pub name: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
    pub state: ComponentState,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Component {
    pub fn is_down(&self) -> bool {
        !self.state.is_available()
    }

    /// Service properties with `objectClass` filled in from the provided
    /// services when the component does not set it itself
    pub fn service_properties(&self) -> BTreeMap<String, PropertyValue> {
        let mut properties = self.properties.clone();
        properties
            .entry(OBJECT_CLASS.to_string())
            .or_insert_with(|| PropertyValue::List(self.services.clone()));
        properties
    }

    /// Names of dependencies that are required and unavailable
    pub fn missing_required(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .filter(|dep| dep.is_unavailable_required())
            .map(|dep| dep.name.as_str())
    }
}

// Builders used by tests
#[cfg(test)]
impl Component {
    pub fn new(id: u64, bundle: u64, name: impl Into<String>, state: ComponentState) -> Self {
        Self {
            id,
            bundle,
            name: name.into(),
            class_name: String::new(),
            services: Vec::new(),
            properties: BTreeMap::new(),
            state,
            dependencies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn with_services(mut self, services: &[&str]) -> Self {
        self.services = services.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }
}
