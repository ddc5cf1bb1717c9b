//! MD029: ordered list item prefixes.
//!
//! Lists are recovered lexically: consecutive ordered items at the same
//! indentation form a group, deeper items open a nested group, and a
//! non-indented line that is not a list item closes every open group.
//! Each group is judged on its own once it closes.
//!
//! Under `one_or_ordered` a group is accepted when every prefix is `1` or
//! when the prefixes count up by one. The count may start at any number,
//! since Markdown keeps the first prefix as the list start (`3. 4. 5.`
//! renders as 3, 4, 5). `ordered` uses the same start.

use std::fmt;
use std::sync::LazyLock;

use marklint_text::{indentation, is_blank};
use regex::Regex;

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\d{1,9})[.)](?:\s|$)").expect("valid regex"));
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-*+](?:\s|$)").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    OneOrOrdered,
    One,
    Zero,
    Ordered,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::OneOrOrdered => "one_or_ordered",
            Style::One => "1/1/1",
            Style::Zero => "0/0/0",
            Style::Ordered => "1/2/3",
        })
    }
}

/// One item of a group: 0-indexed line, column, declared number.
#[derive(Debug, Clone, Copy)]
struct Item {
    line: usize,
    column: usize,
    number: u64,
}

#[derive(Debug)]
struct Group {
    indent: usize,
    items: Vec<Item>,
}

pub struct OlPrefix {
    style: Style,
}

impl OlPrefix {
    pub const META: RuleMeta = RuleMeta {
        id: "MD029",
        aliases: &["ol-prefix"],
        description: "Ordered list item prefix",
        fixable: false,
    };

    fn judge(&self, group: Group, violations: &mut Vec<Violation>) {
        let items = group.items;
        let Some(first) = items.first().map(|item| item.number) else {
            return;
        };
        let sequential = items
            .iter()
            .enumerate()
            .all(|(i, item)| item.number == first + i as u64);
        let all_ones = items.iter().all(|item| item.number == 1);

        let style = match self.style {
            Style::OneOrOrdered if all_ones => Style::One,
            Style::OneOrOrdered if sequential => return,
            // "1. 1. 3." reads as a ones list with a stray number
            Style::OneOrOrdered if items.get(1).is_some_and(|item| item.number == 1) => Style::One,
            Style::OneOrOrdered => Style::Ordered,
            style => style,
        };

        for (i, item) in items.iter().enumerate() {
            let expected = match style {
                Style::One => 1,
                Style::Zero => 0,
                _ => first + i as u64,
            };
            if item.number != expected {
                violations.push(Violation::new(
                    Self::META.id,
                    item.line + 1,
                    item.column,
                    format!(
                        "{} [Expected: {}; Actual: {}; Style: {}]",
                        Self::META.description,
                        expected,
                        item.number,
                        style
                    ),
                ));
            }
        }
    }

    /// Judges and removes every open group indented at least `min_indent`.
    fn close_from(&self, stack: &mut Vec<Group>, min_indent: usize, out: &mut Vec<Violation>) {
        while let Some(group) = stack.pop_if(|group| group.indent >= min_indent) {
            self.judge(group, out);
        }
    }
}

impl Default for OlPrefix {
    fn default() -> Self {
        Self {
            style: Style::OneOrOrdered,
        }
    }
}

impl FromOptions for OlPrefix {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        let style = match options.string_or("style", "one_or_ordered").as_str() {
            "one" => Style::One,
            "zero" => Style::Zero,
            "ordered" => Style::Ordered,
            _ => Style::OneOrOrdered,
        };
        Self { style }
    }
}

impl Rule for OlPrefix {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut stack: Vec<Group> = Vec::new();

        for (idx, line) in doc.lines().iter().enumerate() {
            if doc.in_fence(idx) || is_blank(line) {
                continue;
            }

            if let Some(caps) = ORDERED_ITEM.captures(line) {
                let indent = indentation(line);
                let Ok(number) = caps[2].parse::<u64>() else {
                    continue;
                };
                self.close_from(&mut stack, indent + 1, &mut violations);
                let item = Item {
                    line: idx,
                    column: caps[1].chars().count() + 1,
                    number,
                };
                match stack.last_mut() {
                    Some(group) if group.indent == indent => group.items.push(item),
                    _ => stack.push(Group {
                        indent,
                        items: vec![item],
                    }),
                }
            } else if UNORDERED_ITEM.is_match(line) {
                self.close_from(&mut stack, indentation(line), &mut violations);
            } else if indentation(line) == 0 {
                self.close_from(&mut stack, 0, &mut violations);
            }
        }
        self.close_from(&mut stack, 0, &mut violations);

        violations.sort_by_key(|v| (v.line, v.column));
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::test_support::{lines, run};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn with_style(style: &str) -> OlPrefix {
        let value = json!({ "style": style });
        OlPrefix::from_options(&RuleOptions::from_value("MD029", &value))
    }

    #[test]
    fn test_ones_and_sequential_accepted() {
        let rule = OlPrefix::default();
        assert!(lines(&rule, "1. a\n1. b\n1. c\n").is_empty());
        assert!(lines(&rule, "1. a\n2. b\n3. c\n").is_empty());
    }

    #[test]
    fn test_nested_lists_judged_independently() {
        let source = "1. a\n   1. x\n   2. y\n2. b\n";
        assert!(lines(&OlPrefix::default(), source).is_empty());

        let bad = "1. a\n   1. x\n   3. y\n2. b\n";
        assert_eq!(lines(&OlPrefix::default(), bad), vec![3]);
    }

    #[test]
    fn test_paragraph_separates_lists() {
        let source = "1. a\n2. b\n\nText\n\n1. c\n2. d\n";
        assert!(lines(&OlPrefix::default(), source).is_empty());
    }

    #[test]
    fn test_continuation_lines_keep_group_open() {
        let source = "1. a\n\n   more text\n\n2. b\n";
        assert!(lines(&OlPrefix::default(), source).is_empty());
    }

    #[test]
    fn test_fenced_code_inside_item_is_neutral() {
        let source = "1. a\n\n   ```\n   5. not an item\n   ```\n\n2. b\n";
        assert!(lines(&OlPrefix::default(), source).is_empty());
    }

    #[test]
    fn test_mixed_prefix_reports_message() {
        let violations = run(&OlPrefix::default(), "1. a\n2. b\n2. c\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 3);
        assert!(violations[0].message.contains("Expected: 3; Actual: 2"));
    }

    #[test]
    fn test_explicit_styles() {
        assert_eq!(lines(&with_style("one"), "1. a\n2. b\n"), vec![2]);
        assert_eq!(lines(&with_style("ordered"), "1. a\n1. b\n"), vec![2]);
        assert_eq!(lines(&with_style("zero"), "0. a\n1. b\n"), vec![2]);
    }

    #[test]
    fn test_sequential_run_may_start_anywhere() {
        assert!(lines(&OlPrefix::default(), "3. a\n4. b\n5. c\n").is_empty());
        assert_eq!(lines(&OlPrefix::default(), "3. a\n4. b\n4. c\n"), vec![3]);
    }

    #[test]
    fn test_ordered_from_zero() {
        assert!(lines(&with_style("ordered"), "0. a\n1. b\n2. c\n").is_empty());
    }
}
