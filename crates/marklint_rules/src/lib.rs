//! # marklint_rules
//!
//! The rule contract and the built-in rule catalog.
//!
//! A [`Rule`] inspects a parsed [`Document`] and reports [`Violation`]s.
//! Rules are pure: they never mutate the document, and fixable rules
//! rewrite the whole source independently of `check`.
//!
//! ```rust
//! use marklint_rules::{RuleOptions, find_rule};
//!
//! let entry = find_rule("line-length").unwrap();
//! let rule = entry.build(&RuleOptions::empty(entry.meta.id));
//! assert_eq!(rule.id(), "MD013");
//! ```

mod document;
mod fix;
mod options;
mod registry;
mod rule;
pub mod rules;
mod violation;

pub use document::{Document, Heading};
pub use options::RuleOptions;
pub use registry::{FromOptions, RuleEntry, catalog, find_rule};
pub use rule::{Rule, RuleMeta};
pub use violation::{Severity, Violation};
