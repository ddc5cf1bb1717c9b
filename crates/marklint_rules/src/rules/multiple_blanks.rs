//! MD012: multiple consecutive blank lines.

use marklint_text::{fenced_code_block_mask, is_blank, split_lines};

use crate::fix::{LineEdit, rewrite_lines};
use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct MultipleBlanks {
    maximum: usize,
}

impl MultipleBlanks {
    pub const META: RuleMeta = RuleMeta {
        id: "MD012",
        aliases: &["no-multiple-blanks"],
        description: "Multiple consecutive blank lines",
        fixable: true,
    };

    /// Returns `(line index, run length)` for each blank line beyond the maximum.
    fn excess(&self, lines: &[&str], mask: &[bool]) -> Vec<(usize, usize)> {
        let mut run = 0;
        let mut found = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            if mask.get(idx).copied().unwrap_or(false) || !is_blank(line) {
                run = 0;
                continue;
            }
            run += 1;
            if run > self.maximum {
                found.push((idx, run));
            }
        }
        found
    }
}

impl Default for MultipleBlanks {
    fn default() -> Self {
        Self { maximum: 1 }
    }
}

impl FromOptions for MultipleBlanks {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        Self {
            maximum: options.usize_or("maximum", 1),
        }
    }
}

impl Rule for MultipleBlanks {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        self.excess(doc.lines(), doc.fence_mask())
            .into_iter()
            .map(|(idx, run)| {
                Violation::new(
                    Self::META.id,
                    idx + 1,
                    1,
                    format!(
                        "{} [Expected: {}; Actual: {}]",
                        Self::META.description,
                        self.maximum,
                        run
                    ),
                )
            })
            .collect()
    }

    fn fix(&self, source: &str) -> Option<String> {
        let lines = split_lines(source);
        let mask = fenced_code_block_mask(&lines);
        let excess: Vec<usize> = self.excess(&lines, &mask).into_iter().map(|(i, _)| i).collect();
        Some(rewrite_lines(source, |idx, _| {
            if excess.binary_search(&idx).is_ok() {
                LineEdit::Remove
            } else {
                LineEdit::Keep
            }
        }))
    }
}
