//! MD004: unordered list marker style.

use std::collections::HashMap;

use marklint_ast::{NodeType, TxtNode};

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Consistent,
    Fixed(char),
    /// Each nesting level uses a marker different from its parent level.
    Sublist,
}

pub struct UlStyle {
    style: Style,
}

impl UlStyle {
    pub const META: RuleMeta = RuleMeta {
        id: "MD004",
        aliases: &["ul-style"],
        description: "Unordered list style",
        fixable: false,
    };
}

impl Default for UlStyle {
    fn default() -> Self {
        Self {
            style: Style::Consistent,
        }
    }
}

impl FromOptions for UlStyle {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        let style = match options.string_or("style", "consistent").as_str() {
            "asterisk" => Style::Fixed('*'),
            "dash" => Style::Fixed('-'),
            "plus" => Style::Fixed('+'),
            "sublist" => Style::Sublist,
            _ => Style::Consistent,
        };
        Self { style }
    }
}

fn marker_name(marker: char) -> &'static str {
    match marker {
        '*' => "asterisk",
        '+' => "plus",
        _ => "dash",
    }
}

/// Collects unordered lists with their nesting depth among unordered lists.
fn unordered_lists<'a>(node: &'a TxtNode<'a>, depth: usize, out: &mut Vec<(&'a TxtNode<'a>, usize)>) {
    for child in node.children {
        let nested = match child.list() {
            Some(list) if child.node_type == NodeType::List && !list.ordered => {
                out.push((child, depth));
                depth + 1
            }
            _ => depth,
        };
        unordered_lists(child, nested, out);
    }
}

impl Rule for UlStyle {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mut lists = Vec::new();
        unordered_lists(doc.tree(), 0, &mut lists);

        let mut violations = Vec::new();
        let mut first: Option<char> = None;
        let mut by_depth: HashMap<usize, char> = HashMap::new();

        for (list, depth) in lists {
            let Some(actual) = list.list().map(|l| l.marker) else {
                continue;
            };
            let expected = match self.style {
                Style::Consistent => *first.get_or_insert(actual),
                Style::Fixed(marker) => marker,
                Style::Sublist => {
                    let parent = depth.checked_sub(1).and_then(|d| by_depth.get(&d)).copied();
                    let seen = by_depth.get(&depth).copied();
                    match seen {
                        Some(marker) => marker,
                        None if Some(actual) == parent => {
                            ['*', '+', '-'].into_iter().find(|&m| Some(m) != parent).unwrap_or(actual)
                        }
                        None => actual,
                    }
                }
            };
            by_depth.entry(depth).or_insert(expected);

            if actual != expected {
                violations.push(Violation::new(
                    Self::META.id,
                    doc.line_of(list.span.start),
                    doc.position(list.span.start).1,
                    format!(
                        "{} [Expected: {}; Actual: {}]",
                        Self::META.description,
                        marker_name(expected),
                        marker_name(actual)
                    ),
                ));
            }
        }

        violations
    }
}
