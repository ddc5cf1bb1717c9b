//! Core linter engine.

use marklint_ast::AstArena;
use marklint_parser::{MarkdownParser, Parser};
use marklint_rules::{Document, Violation};
use tracing::debug;

use crate::LinterError;
use crate::config::EffectiveConfig;
use crate::factory::{BoundRule, RuleFactory};

/// Runs a fixed, ordered set of bound rules over Markdown sources.
///
/// A `Linter` holds no per-document state and can be shared across threads.
#[derive(Debug)]
pub struct Linter {
    rules: Vec<BoundRule>,
    parser: MarkdownParser,
}

/// Result of [`Linter::fix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The rewritten source.
    pub output: String,
    /// Ids of the rules that changed the text, in application order.
    pub applied: Vec<String>,
}

impl FixOutcome {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

impl Linter {
    /// Creates a linter running `rules` in the given order.
    pub fn new(rules: Vec<BoundRule>) -> Self {
        Self {
            rules,
            parser: MarkdownParser::new(),
        }
    }

    /// Creates a linter for one file's effective configuration.
    pub fn from_config(effective: &EffectiveConfig) -> Self {
        Self::new(RuleFactory::build(effective))
    }

    pub fn rules(&self) -> &[BoundRule] {
        &self.rules
    }

    /// Lints `source`.
    ///
    /// Violations carry the bound rule's id and severity, positions are
    /// clamped into the document, and the result is sorted by line, then
    /// rule id, then column.
    pub fn lint(&self, source: &str) -> Result<Vec<Violation>, LinterError> {
        let arena = AstArena::for_source(source.len());
        let tree = self
            .parser
            .parse(&arena, source)
            .map_err(|e| LinterError::parse(e.to_string()))?;
        let tree = arena.alloc(tree);
        let doc = Document::new(source, tree);

        let mut violations = Vec::new();
        for bound in &self.rules {
            let id = bound.rule.id();
            let found = bound.rule.check(&doc);
            debug!("{} reported {} violation(s)", id, found.len());
            violations.extend(found.into_iter().map(|mut v| {
                v.rule = id.to_string();
                v.severity = bound.severity;
                clamp(&mut v, &doc);
                v
            }));
        }

        sort_violations(&mut violations);
        Ok(violations)
    }

    /// Applies every enabled fixable rule in registration order.
    pub fn fix(&self, source: &str) -> FixOutcome {
        let mut output = source.to_string();
        let mut applied = Vec::new();
        for bound in &self.rules {
            if let Some(fixed) = bound.rule.fix(&output)
                && fixed != output
            {
                debug!("{} rewrote the source", bound.rule.id());
                applied.push(bound.rule.id().to_string());
                output = fixed;
            }
        }
        FixOutcome { output, applied }
    }
}

/// Sorts by `(line, rule, column)`, keeping emission order for full ties.
pub fn sort_violations(violations: &mut [Violation]) {
    violations.sort_by(|a, b| {
        a.line
            .cmp(&b.line)
            .then_with(|| a.rule.cmp(&b.rule))
            .then_with(|| a.column.cmp(&b.column))
    });
}

fn clamp(violation: &mut Violation, doc: &Document<'_>) {
    let last_line = doc.line_count();
    violation.line = violation.line.clamp(1, last_line);
    let width = doc.line(violation.line).map_or(0, |l| l.chars().count());
    violation.column = violation.column.clamp(1, width + 1);
}
