//! Service property predicates
//!
//! Matching decisions only ever see a predicate through
//! [`ServicePredicate`]; any filter language can be plugged in behind it.
//! [`PropertyFilter`] is the one the command line uses.

use std::collections::BTreeMap;

use crate::domain::PropertyValue;
use crate::error::{self, Result};

/// A predicate over a component's advertised service properties
pub trait ServicePredicate {
    fn matches(&self, properties: &BTreeMap<String, PropertyValue>) -> bool;
}

impl<F> ServicePredicate for F
where
    F: Fn(&BTreeMap<String, PropertyValue>) -> bool,
{
    fn matches(&self, properties: &BTreeMap<String, PropertyValue>) -> bool {
        self(properties)
    }
}

/// Conjunction of `key=value` terms, e.g. `objectClass=org.example.Greeter,lang=en`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilter {
    terms: Vec<(String, String)>,
}

impl PropertyFilter {
    pub fn parse(filter: &str) -> Result<Self> {
        if filter.trim().is_empty() {
            return Err(error::filter::invalid_services(filter, "filter is empty"));
        }

        let mut terms = Vec::new();
        for term in filter.split(',') {
            let Some((key, value)) = term.split_once('=') else {
                return Err(error::filter::invalid_services(
                    filter,
                    format!("term '{}' is missing '='", term.trim()),
                ));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(error::filter::invalid_services(
                    filter,
                    format!("term '{}' has an empty key", term.trim()),
                ));
            }
            terms.push((key.to_string(), value.trim().to_string()));
        }

        Ok(Self { terms })
    }
}

impl ServicePredicate for PropertyFilter {
    fn matches(&self, properties: &BTreeMap<String, PropertyValue>) -> bool {
        self.terms.iter().all(|(key, expected)| {
            properties
                .get(key)
                .is_some_and(|value| value.matches(expected))
        })
    }
}
