//! MD009: trailing spaces.

use marklint_text::{fenced_code_block_mask, is_blank, split_lines};

use crate::fix::{LineEdit, rewrite_lines};
use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct TrailingSpaces {
    br_spaces: usize,
    strict: bool,
}

impl TrailingSpaces {
    pub const META: RuleMeta = RuleMeta {
        id: "MD009",
        aliases: &["no-trailing-spaces"],
        description: "Trailing spaces",
        fixable: true,
    };

    /// Number of disallowed trailing spaces on line `idx`, if any.
    fn offending(&self, lines: &[&str], mask: &[bool], idx: usize) -> Option<usize> {
        if mask.get(idx).copied().unwrap_or(false) {
            return None;
        }
        let line = lines[idx];
        let count = line.len() - line.trim_end_matches(' ').len();
        if count == 0 {
            return None;
        }
        let hard_break = self.br_spaces >= 2 && count == self.br_spaces && count < line.len();
        if hard_break {
            let continues = lines.get(idx + 1).is_some_and(|next| !is_blank(next));
            if !self.strict || continues {
                return None;
            }
        }
        Some(count)
    }

    fn expected(&self) -> String {
        if self.br_spaces >= 2 {
            format!("0 or {}", self.br_spaces)
        } else {
            "0".to_string()
        }
    }
}

impl Default for TrailingSpaces {
    fn default() -> Self {
        Self {
            br_spaces: 2,
            strict: false,
        }
    }
}

impl FromOptions for TrailingSpaces {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        let defaults = Self::default();
        Self {
            br_spaces: options.usize_or("br_spaces", defaults.br_spaces),
            strict: options.bool_or("strict", defaults.strict),
        }
    }
}

impl Rule for TrailingSpaces {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let lines = doc.lines();
        let mask = doc.fence_mask();
        (0..lines.len())
            .filter_map(|idx| {
                let count = self.offending(lines, mask, idx)?;
                let column = lines[idx].trim_end_matches(' ').chars().count() + 1;
                Some(Violation::new(
                    Self::META.id,
                    idx + 1,
                    column,
                    format!(
                        "{} [Expected: {}; Actual: {}]",
                        Self::META.description,
                        self.expected(),
                        count
                    ),
                ))
            })
            .collect()
    }

    fn fix(&self, source: &str) -> Option<String> {
        let lines = split_lines(source);
        let mask = fenced_code_block_mask(&lines);
        Some(rewrite_lines(source, |idx, line| {
            match self.offending(&lines, &mask, idx) {
                Some(_) => LineEdit::Replace(line.trim_end_matches(' ').to_string()),
                None => LineEdit::Keep,
            }
        }))
    }
}
