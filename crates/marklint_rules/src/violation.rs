//! Violation types for lint results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level for violations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - fails the run.
    #[default]
    Error,
    /// Warning - reported but does not fail the run.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// One reported rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Id of the rule that produced this violation (e.g. `MD013`).
    pub rule: String,

    /// Line number (1-indexed).
    pub line: usize,

    /// Column number (1-indexed, in characters).
    pub column: usize,

    /// Human readable message.
    pub message: String,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Violation {
    /// Creates a new error-severity violation.
    pub fn new(
        rule: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            line,
            column,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}
