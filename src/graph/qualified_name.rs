//! Qualified component names
//!
//! Components and dependencies name their targets as
//! `simple.Name(key=value,other=value)`. A component may provide several
//! names at once (`org.example.A,org.example.B(key=value)`).

use std::collections::BTreeMap;

/// A name split into its simple part and its property qualifiers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QualifiedName {
    pub simple_name: String,
    pub properties: BTreeMap<String, String>,
}

impl QualifiedName {
    /// Parse a qualified name, never failing
    ///
    /// The qualifier is the first `(`...`)` group. Without a closing `)`, or
    /// with a nested `(`, the whole input is taken as the simple name.
    /// Terms that are not exactly `key=value` are dropped.
    pub fn parse(input: &str) -> Self {
        let Some(open) = input.find('(') else {
            return Self::simple(input);
        };
        let Some(close) = input[open + 1..].find(')').map(|i| open + 1 + i) else {
            return Self::simple(input);
        };
        let qualifier = &input[open + 1..close];
        if qualifier.contains('(') {
            return Self::simple(input);
        }

        Self {
            simple_name: input[..open].trim().to_string(),
            properties: parse_properties(qualifier),
        }
    }

    fn simple(input: &str) -> Self {
        Self {
            simple_name: input.trim().to_string(),
            properties: BTreeMap::new(),
        }
    }

    /// Each comma separated name in the simple part
    pub fn provided_names(&self) -> impl Iterator<Item = &str> {
        self.simple_name.split(',').map(str::trim)
    }

    /// Whether `candidate` provides this name with at least these properties
    ///
    /// Extra properties on the candidate are allowed.
    pub fn is_satisfied_by(&self, candidate: &QualifiedName) -> bool {
        candidate
            .provided_names()
            .any(|name| name == self.simple_name)
            && self
                .properties
                .iter()
                .all(|(key, value)| candidate.properties.get(key) == Some(value))
    }
}

fn parse_properties(qualifier: &str) -> BTreeMap<String, String> {
    qualifier
        .split(',')
        .filter_map(|term| {
            let mut parts = term.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) if !key.trim().is_empty() => {
                    Some((key.trim().to_string(), value.trim().to_string()))
                }
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_parse_plain_name() {
        let name = QualifiedName::parse(" org.example.Greeter ");
        assert_eq!(name.simple_name, "org.example.Greeter");
        assert!(name.properties.is_empty());
    }

    #[test]
    fn test_parse_qualified_name() {
        let name = QualifiedName::parse("org.example.Greeter(lang=en, region=eu)");
        assert_eq!(name.simple_name, "org.example.Greeter");
        assert_eq!(name.properties, props(&[("lang", "en"), ("region", "eu")]));
    }

    #[test]
    fn test_parse_drops_malformed_terms() {
        let name = QualifiedName::parse("Foo(a=1,b,c=2=3,=4)");
        assert_eq!(name.simple_name, "Foo");
        assert_eq!(name.properties, props(&[("a", "1")]));
    }

    #[test]
    fn test_parse_unclosed_qualifier_degrades() {
        let name = QualifiedName::parse("Foo(a=1");
        assert_eq!(name.simple_name, "Foo(a=1");
        assert!(name.properties.is_empty());
    }

    #[test]
    fn test_parse_close_before_open_degrades() {
        let name = QualifiedName::parse("Foo)a=1(");
        assert_eq!(name.simple_name, "Foo)a=1(");
        assert!(name.properties.is_empty());
    }

    #[test]
    fn test_parse_nested_open_degrades() {
        let name = QualifiedName::parse("Foo((a=1)");
        assert_eq!(name.simple_name, "Foo((a=1)");
        assert!(name.properties.is_empty());
    }

    #[test]
    fn test_subset_match_allows_extra_candidate_properties() {
        let query = QualifiedName::parse("Foo(a=1)");
        assert!(query.is_satisfied_by(&QualifiedName::parse("Foo(a=1,b=2)")));
        assert!(!query.is_satisfied_by(&QualifiedName::parse("Foo(a=9)")));
        assert!(!query.is_satisfied_by(&QualifiedName::parse("Foo")));
    }

    #[test]
    fn test_match_is_order_independent() {
        let query = QualifiedName::parse("Foo(b=2,a=1)");
        assert!(query.is_satisfied_by(&QualifiedName::parse("Foo(a=1,c=3,b=2)")));
    }

    #[test]
    fn test_match_any_of_multiple_provided_names() {
        let candidate = QualifiedName::parse("org.example.A, org.example.B(x=y)");
        assert!(QualifiedName::parse("org.example.B").is_satisfied_by(&candidate));
        assert!(QualifiedName::parse("org.example.A(x=y)").is_satisfied_by(&candidate));
        assert!(!QualifiedName::parse("org.example.C").is_satisfied_by(&candidate));
    }
}
