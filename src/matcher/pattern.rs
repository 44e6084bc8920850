//! Implementation class name patterns

use regex::Regex;

use crate::error::{self, Result};

/// A regular expression over the whole class name, optionally negated with `!`
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
    negated: bool,
}

impl NamePattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let (negated, body) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };
        let regex = Regex::new(&format!("^(?:{body})$"))
            .map_err(|e| error::filter::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self { regex, negated })
    }

    pub fn parse_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Self>> {
        patterns.iter().map(|p| Self::parse(p.as_ref())).collect()
    }

    /// Match result with this pattern's own negation applied
    pub fn matches(&self, class_name: &str) -> bool {
        self.regex.is_match(class_name) != self.negated
    }
}
