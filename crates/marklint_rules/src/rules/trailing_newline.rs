//! MD047: files end with a single newline.

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct TrailingNewline;

impl TrailingNewline {
    pub const META: RuleMeta = RuleMeta {
        id: "MD047",
        aliases: &["single-trailing-newline"],
        description: "Files should end with a single newline character",
        fixable: true,
    };
}

impl FromOptions for TrailingNewline {
    fn from_options(_options: &RuleOptions<'_>) -> Self {
        Self
    }
}

impl Rule for TrailingNewline {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let source = doc.source();
        if source.is_empty() || source.ends_with('\n') {
            return Vec::new();
        }
        let line = doc.line_count();
        let column = doc.line(line).map_or(0, |l| l.chars().count()) + 1;
        vec![Violation::new(
            Self::META.id,
            line,
            column,
            Self::META.description,
        )]
    }

    fn fix(&self, source: &str) -> Option<String> {
        if source.is_empty() || source.ends_with('\n') {
            return Some(source.to_string());
        }
        let newline = if source.contains("\r\n") { "\r\n" } else { "\n" };
        Some(format!("{source}{newline}"))
    }
}
