//! MD055: table pipe style.

use std::fmt;

use marklint_text::table::{has_leading_pipe, has_trailing_pipe};

use super::tables::table_blocks;
use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

/// Which edges of a row carry a pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edges {
    leading: bool,
    trailing: bool,
}

impl Edges {
    fn of(line: &str) -> Self {
        Self {
            leading: has_leading_pipe(line),
            trailing: has_trailing_pipe(line),
        }
    }
}

impl fmt::Display for Edges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match (self.leading, self.trailing) {
            (true, true) => "leading_and_trailing",
            (true, false) => "leading_only",
            (false, true) => "trailing_only",
            (false, false) => "no_leading_or_trailing",
        })
    }
}

#[derive(Default)]
pub struct TablePipeStyle {
    /// `None` means consistent with the first row of the document.
    style: Option<Edges>,
}

impl TablePipeStyle {
    pub const META: RuleMeta = RuleMeta {
        id: "MD055",
        aliases: &["table-pipe-style"],
        description: "Table pipe style",
        fixable: false,
    };
}

impl FromOptions for TablePipeStyle {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        let edges = |leading, trailing| Some(Edges { leading, trailing });
        let style = match options.string_or("style", "consistent").as_str() {
            "leading_and_trailing" => edges(true, true),
            "leading_only" => edges(true, false),
            "trailing_only" => edges(false, true),
            "no_leading_or_trailing" => edges(false, false),
            _ => None,
        };
        Self { style }
    }
}

impl Rule for TablePipeStyle {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let lines = doc.lines();
        let mut expected = self.style;
        let mut violations = Vec::new();

        for block in table_blocks(lines, doc.fence_mask()) {
            for idx in block {
                let line = lines[idx];
                let actual = Edges::of(line);
                let want = *expected.get_or_insert(actual);
                if actual == want {
                    continue;
                }
                let (column, detail) = if actual.leading != want.leading {
                    let detail = if want.leading {
                        "Missing leading pipe"
                    } else {
                        "Unexpected leading pipe"
                    };
                    (line.len() - line.trim_start().len() + 1, detail)
                } else {
                    let detail = if want.trailing {
                        "Missing trailing pipe"
                    } else {
                        "Unexpected trailing pipe"
                    };
                    (line.trim_end().chars().count().max(1), detail)
                };
                violations.push(Violation::new(
                    Self::META.id,
                    idx + 1,
                    column,
                    format!(
                        "{} [Expected: {}; Actual: {}; {}]",
                        Self::META.description,
                        want,
                        actual,
                        detail
                    ),
                ));
            }
        }
        violations
    }
}
