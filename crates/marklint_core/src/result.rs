//! Lint result types.

use std::path::{Path, PathBuf};

use marklint_rules::{Severity, Violation};
use serde::{Deserialize, Serialize};

/// File identifier used when the source comes from standard input.
pub const STDIN_FILE_ID: &str = "stdin";

/// Result of linting a single file.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Path to the file.
    pub path: PathBuf,

    /// Violations found, sorted.
    pub violations: Vec<Violation>,

    /// Whether this result was served from the cache.
    pub from_cache: bool,
}

impl LintResult {
    /// Creates a new lint result.
    pub fn new(path: PathBuf, violations: Vec<Violation>) -> Self {
        Self {
            path,
            violations,
            from_cache: false,
        }
    }

    /// Creates a lint result from cache.
    pub fn cached(path: PathBuf, violations: Vec<Violation>) -> Self {
        Self {
            path,
            violations,
            from_cache: true,
        }
    }

    /// Returns true if any violation has error severity.
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == Severity::Error)
    }

    /// Flattens the violations into output records.
    pub fn records(&self) -> Vec<LintRecord> {
        let file = display_path(&self.path);
        self.violations
            .iter()
            .map(|v| LintRecord::new(file.clone(), v))
            .collect()
    }
}

/// One violation as handed to output formatters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintRecord {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub rule: String,
    pub message: String,
    pub severity: Severity,
}

impl LintRecord {
    pub fn new(file: impl Into<String>, violation: &Violation) -> Self {
        Self {
            file: file.into(),
            line: violation.line,
            column: violation.column,
            rule: violation.rule.clone(),
            message: violation.message.clone(),
            severity: violation.severity,
        }
    }

    /// Records for violations of source read from standard input.
    pub fn from_stdin(violations: &[Violation]) -> Vec<Self> {
        violations
            .iter()
            .map(|v| Self::new(STDIN_FILE_ID, v))
            .collect()
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
