//! # marklint_core
//!
//! Core linter engine for marklint.
//!
//! This crate provides:
//! - The `Linter` orchestrator (parse, check, sort, fix)
//! - Configuration discovery, `extends` resolution and per-file overrides
//! - Binding configuration onto catalog rules
//! - Cached single-file and parallel linting
//!
//! ## Example
//!
//! ```rust
//! use marklint_core::Linter;
//! use serde_json::json;
//!
//! let config = json!({"default": false, "MD041": true});
//! let linter = Linter::from_config(config.as_object().unwrap());
//!
//! let violations = linter.lint("Not a heading\n").unwrap();
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].rule, "MD041");
//! ```

pub mod config;
mod error;
pub mod factory;
pub mod file_finder;
mod file_linter;
mod linter;
mod parallel_linter;
mod result;

pub use config::{ConfigFile, EffectiveConfig, ResolvedConfig};
pub use error::LinterError;
pub use factory::{BoundRule, RuleFactory, RuleSetting};
pub use file_linter::{MAX_FILE_SIZE, fix_file, lint_file, read_source};
pub use linter::{FixOutcome, Linter, sort_violations};
pub use parallel_linter::{LintFilesResult, fix_files, lint_files};
pub use result::{LintRecord, LintResult, STDIN_FILE_ID};

pub use marklint_cache::CacheManager;
pub use marklint_rules::{Severity, Violation};

#[cfg(test)]
mod test_utils;
