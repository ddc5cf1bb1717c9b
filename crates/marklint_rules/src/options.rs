//! Typed access to a rule's option mapping.

use serde_json::{Map, Value};
use tracing::warn;

/// Read-only view over the options bound to one rule.
///
/// Getters are permissive: a missing key or a value of the wrong type
/// yields the supplied default. Wrong types are logged.
#[derive(Debug, Clone, Copy)]
pub struct RuleOptions<'a> {
    rule: &'a str,
    map: Option<&'a Map<String, Value>>,
}

impl<'a> RuleOptions<'a> {
    /// Options for `rule` backed by `map`.
    pub fn new(rule: &'a str, map: &'a Map<String, Value>) -> Self {
        Self {
            rule,
            map: Some(map),
        }
    }

    /// Options with no keys set.
    pub fn empty(rule: &'a str) -> Self {
        Self { rule, map: None }
    }

    /// Builds options from an arbitrary JSON value; non-objects yield no keys.
    pub fn from_value(rule: &'a str, value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self::new(rule, map),
            _ => Self::empty(rule),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key))
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn usize_or(&self, key: &str, default: usize) -> usize {
        match self.get(key) {
            None => default,
            Some(v) => match v.as_u64().and_then(|n| usize::try_from(n).ok()) {
                Some(n) => n,
                None => self.mistyped(key, "a non-negative integer", default),
            },
        }
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(_) => self.mistyped(key, "a boolean", default),
        }
    }

    pub fn string_or(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            None => default.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => self.mistyped(key, "a string", default.to_string()),
        }
    }

    /// Reads a list of strings. Non-string entries are skipped.
    pub fn string_list_or(&self, key: &str, default: &[&str]) -> Vec<String> {
        match self.get(key) {
            None => default.iter().map(|s| s.to_string()).collect(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            Some(_) => self.mistyped(
                key,
                "a list of strings",
                default.iter().map(|s| s.to_string()).collect(),
            ),
        }
    }

    fn mistyped<T>(&self, key: &str, expected: &str, default: T) -> T {
        warn!(
            "Option '{}' of rule {} should be {}; using the default",
            key, self.rule, expected
        );
        default
    }
}
