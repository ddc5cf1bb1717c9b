//! MD010: hard tabs.

use marklint_text::{fenced_code_block_mask, split_lines};

use crate::fix::{LineEdit, rewrite_lines};
use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct HardTabs {
    code_blocks: bool,
    spaces_per_tab: usize,
}

impl HardTabs {
    pub const META: RuleMeta = RuleMeta {
        id: "MD010",
        aliases: &["no-hard-tabs"],
        description: "Hard tabs",
        fixable: true,
    };

    fn applies(&self, mask: &[bool], idx: usize, line: &str) -> bool {
        line.contains('\t') && (self.code_blocks || !mask.get(idx).copied().unwrap_or(false))
    }
}

impl Default for HardTabs {
    fn default() -> Self {
        Self {
            code_blocks: true,
            spaces_per_tab: 4,
        }
    }
}

impl FromOptions for HardTabs {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        let defaults = Self::default();
        Self {
            code_blocks: options.bool_or("code_blocks", defaults.code_blocks),
            spaces_per_tab: options.usize_or("spaces_per_tab", defaults.spaces_per_tab),
        }
    }
}

impl Rule for HardTabs {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mask = doc.fence_mask();
        doc.lines()
            .iter()
            .enumerate()
            .filter(|(idx, line)| self.applies(mask, *idx, line))
            .filter_map(|(idx, line)| {
                let column = line.chars().position(|c| c == '\t')? + 1;
                Some(Violation::new(
                    Self::META.id,
                    idx + 1,
                    column,
                    format!("{} [Column: {}]", Self::META.description, column),
                ))
            })
            .collect()
    }

    fn fix(&self, source: &str) -> Option<String> {
        let mask = fenced_code_block_mask(&split_lines(source));
        let spaces = " ".repeat(self.spaces_per_tab);
        Some(rewrite_lines(source, |idx, line| {
            if self.applies(&mask, idx, line) {
                LineEdit::Replace(line.replace('\t', &spaces))
            } else {
                LineEdit::Keep
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::test_support::{assert_fix_settles, lines, run};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_reports_first_tab_column() {
        let violations = run(&HardTabs::default(), "ab\tc\td\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].column, 3);
        assert!(violations[0].message.ends_with("[Column: 3]"));
    }

    #[test]
    fn test_code_blocks_option() {
        let source = "```\n\tcode\n```\n";
        assert_eq!(lines(&HardTabs::default(), source), vec![2]);

        let value = json!({"code_blocks": false});
        let rule = HardTabs::from_options(&RuleOptions::from_value("MD010", &value));
        assert!(lines(&rule, source).is_empty());
    }

    #[test]
    fn test_fix_uses_spaces_per_tab() {
        let value = json!({"spaces_per_tab": 2});
        let rule = HardTabs::from_options(&RuleOptions::from_value("MD010", &value));
        assert_eq!(assert_fix_settles(&rule, "a\tb\n"), "a  b\n");
    }
}
