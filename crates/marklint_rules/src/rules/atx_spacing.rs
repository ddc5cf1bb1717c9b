//! MD018: missing space after the hashes of an ATX heading.

use std::sync::LazyLock;

use marklint_text::{fenced_code_block_mask, split_lines};
use regex::Regex;

use crate::fix::{LineEdit, rewrite_lines};
use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

static NO_SPACE_ATX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}#{1,6}[^#\s]").expect("valid regex"));

pub struct AtxSpacing;

impl AtxSpacing {
    pub const META: RuleMeta = RuleMeta {
        id: "MD018",
        aliases: &["no-missing-space-atx"],
        description: "No space after hash on atx style heading",
        fixable: true,
    };

    fn offending(mask: &[bool], idx: usize, line: &str) -> bool {
        !mask.get(idx).copied().unwrap_or(false) && NO_SPACE_ATX.is_match(line)
    }
}

impl FromOptions for AtxSpacing {
    fn from_options(_options: &RuleOptions<'_>) -> Self {
        Self
    }
}

impl Rule for AtxSpacing {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mask = doc.fence_mask();
        doc.lines()
            .iter()
            .enumerate()
            .filter(|(idx, line)| Self::offending(mask, *idx, line))
            .map(|(idx, line)| {
                let column = line.len() - line.trim_start().len() + 1;
                Violation::new(
                    Self::META.id,
                    idx + 1,
                    column,
                    format!("{} [Context: \"{}\"]", Self::META.description, line.trim()),
                )
            })
            .collect()
    }

    fn fix(&self, source: &str) -> Option<String> {
        let mask = fenced_code_block_mask(&split_lines(source));
        Some(rewrite_lines(source, |idx, line| {
            if !Self::offending(&mask, idx, line) {
                return LineEdit::Keep;
            }
            let indent = line.len() - line.trim_start().len();
            let hashes = indent + line[indent..].bytes().take_while(|&b| b == b'#').count();
            LineEdit::Replace(format!("{} {}", &line[..hashes], &line[hashes..]))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::test_support::{assert_fix_settles, lines, run};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_space() {
        let violations = run(&AtxSpacing, "#Heading\n\n## Fine\n\n  ##Indented\n");
        let found: Vec<_> = violations.iter().map(|v| (v.line, v.column)).collect();
        assert_eq!(found, vec![(1, 1), (5, 3)]);
        assert!(violations[0].message.contains("\"#Heading\""));
    }

    #[test]
    fn test_ignores_code_and_long_runs() {
        assert!(lines(&AtxSpacing, "```\n#include <stdio.h>\n```\n").is_empty());
        assert!(lines(&AtxSpacing, "#######seven\n").is_empty());
    }

    #[test]
    fn test_fix() {
        assert_eq!(assert_fix_settles(&AtxSpacing, "#A\n##B ##\n"), "# A\n## B ##\n");
    }
}
