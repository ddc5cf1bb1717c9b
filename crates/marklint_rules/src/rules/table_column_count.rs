//! MD056: every table row has the header's cell count.

use marklint_text::table::column_count;

use super::tables::table_blocks;
use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct TableColumnCount;

impl TableColumnCount {
    pub const META: RuleMeta = RuleMeta {
        id: "MD056",
        aliases: &["table-column-count"],
        description: "Table column count",
        fixable: false,
    };
}

impl FromOptions for TableColumnCount {
    fn from_options(_options: &RuleOptions<'_>) -> Self {
        Self
    }
}

impl Rule for TableColumnCount {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let lines = doc.lines();
        let mut violations = Vec::new();

        for block in table_blocks(lines, doc.fence_mask()) {
            let expected = column_count(lines[block.start]);
            for idx in block.skip(2) {
                let actual = column_count(lines[idx]);
                if actual == expected {
                    continue;
                }
                let detail = if actual < expected {
                    "Too few cells, row will be missing data"
                } else {
                    "Too many cells, extra data will be missing"
                };
                violations.push(Violation::new(
                    Self::META.id,
                    idx + 1,
                    1,
                    format!(
                        "{} [Expected: {}; Actual: {}; {}]",
                        Self::META.description,
                        expected,
                        actual,
                        detail
                    ),
                ));
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

    #[test]
    fn test_cell_count_mismatch() {
        let source = "| a | b |\n| - | - |\n| 1 |\n| 1 | 2 | 3 |\n| 1 | 2 |\n";
        let violations = run(&TableColumnCount, source);
        let found: Vec<_> = violations.iter().map(|v| v.line).collect();
        assert_eq!(found, vec![3, 4]);
        assert!(violations[0].message.contains("Too few cells"));
        assert!(violations[1].message.contains("Too many cells"));
    }

    #[test]
    fn test_escaped_pipe_is_not_a_separator() {
        let source = "| a | b |\n| - | - |\n| x \\| y | z |\n";
        assert!(run(&TableColumnCount, source).is_empty());
    }
}
