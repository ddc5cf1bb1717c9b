//! MD022: headings are surrounded by blank lines.

use marklint_ast::NodeType;

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct BlanksAroundHeadings {
    lines_above: usize,
    lines_below: usize,
}

impl BlanksAroundHeadings {
    pub const META: RuleMeta = RuleMeta {
        id: "MD022",
        aliases: &["blanks-around-headings"],
        description: "Headings should be surrounded by blank lines",
        fixable: false,
    };

    fn violation(&self, line: usize, expected: usize, actual: usize, side: &str) -> Violation {
        Violation::new(
            Self::META.id,
            line,
            1,
            format!(
                "{} [Expected: {}; Actual: {}; {}]",
                Self::META.description,
                expected,
                actual,
                side
            ),
        )
    }
}

/// Blank, or an empty blockquote continuation line.
fn is_blank_like(line: &str) -> bool {
    line.chars().all(|c| c.is_whitespace() || c == '>')
}

impl Default for BlanksAroundHeadings {
    fn default() -> Self {
        Self {
            lines_above: 1,
            lines_below: 1,
        }
    }
}

impl FromOptions for BlanksAroundHeadings {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        Self {
            lines_above: options.usize_or("lines_above", 1),
            lines_below: options.usize_or("lines_below", 1),
        }
    }
}

impl Rule for BlanksAroundHeadings {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let lines = doc.lines();
        // front matter counts as the start of the document
        let first_line = doc
            .tree()
            .children
            .first()
            .filter(|node| node.node_type == NodeType::FrontMatter)
            .map_or(1, |node| doc.line_of(node.span.end.saturating_sub(1)) + 1);

        let mut violations = Vec::new();
        for heading in doc.headings() {
            let mut above = 0;
            let mut line = heading.line;
            while line > first_line && is_blank_like(lines[line - 2]) {
                above += 1;
                line -= 1;
            }
            if line > first_line && above < self.lines_above {
                violations.push(self.violation(heading.line, self.lines_above, above, "Above"));
            }

            let mut below = 0;
            let mut line = heading.end_line;
            while line < lines.len() && is_blank_like(lines[line]) {
                below += 1;
                line += 1;
            }
            if line < lines.len() && below < self.lines_below {
                violations.push(self.violation(heading.line, self.lines_below, below, "Below"));
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::test_support::run;
    use pretty_assertions::assert_eq;

    fn sides(source: &str) -> Vec<(usize, bool)> {
        run(&BlanksAroundHeadings::default(), source)
            .into_iter()
            .map(|v| (v.line, v.message.ends_with("Above]")))
            .collect()
    }

    #[test]
    fn test_missing_blank_lines() {
        assert_eq!(sides("text\n# A\ntext\n"), vec![(2, true), (2, false)]);
    }

    #[test]
    fn test_document_edges_are_fine() {
        assert!(sides("# A\n\ntext\n\n## B\n").is_empty());
    }

    #[test]
    fn test_setext_uses_underline_for_below() {
        assert_eq!(sides("A\n===\ntext\n"), vec![(1, false)]);
    }

    #[test]
    fn test_front_matter_is_document_start() {
        assert!(sides("---\ntitle: x\n---\n# A\n\ntext\n").is_empty());
    }
}
