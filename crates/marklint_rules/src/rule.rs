//! The rule contract.

use crate::{Document, Violation};

/// Static identity of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    /// Stable external id, e.g. `MD013`.
    pub id: &'static str,
    /// Alternative names accepted in configuration, e.g. `line-length`.
    pub aliases: &'static [&'static str],
    /// One-line description.
    pub description: &'static str,
    /// Whether the rule implements [`Rule::fix`].
    pub fixable: bool,
}

impl RuleMeta {
    /// Returns true if `name` is this rule's id or one of its aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.id.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// A configured checker.
///
/// `check` is a pure function of the document and the rule's bound
/// configuration; it never mutates the document. `fix` is an independent
/// pure rewrite of the whole source.
pub trait Rule: Send + Sync {
    /// Static identity of the rule.
    fn meta(&self) -> &'static RuleMeta;

    /// Reports violations found in `doc`.
    fn check(&self, doc: &Document<'_>) -> Vec<Violation>;

    /// Rewrites `source` to resolve the violations this rule can fix.
    ///
    /// Returns `None` when the rule has no fix operation.
    fn fix(&self, _source: &str) -> Option<String> {
        None
    }

    fn id(&self) -> &'static str {
        self.meta().id
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.meta().aliases
    }

    fn description(&self) -> &'static str {
        self.meta().description
    }
}
