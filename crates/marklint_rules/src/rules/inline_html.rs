//! MD033: inline HTML.

use std::sync::LazyLock;

use marklint_ast::NodeType;
use regex::Regex;

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

static OPENING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Za-z][A-Za-z0-9-]*)(?:[\s/>]|$)").expect("valid regex"));

#[derive(Default)]
pub struct InlineHtml {
    /// Lowercased element names that may appear.
    allowed_elements: Vec<String>,
}

impl InlineHtml {
    pub const META: RuleMeta = RuleMeta {
        id: "MD033",
        aliases: &["no-inline-html"],
        description: "Inline HTML",
        fixable: false,
    };
}

impl FromOptions for InlineHtml {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        Self {
            allowed_elements: options
                .string_list_or("allowed_elements", &[])
                .into_iter()
                .map(|name| name.to_ascii_lowercase())
                .collect(),
        }
    }
}

impl Rule for InlineHtml {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();
        for node in doc.nodes_of(NodeType::Html) {
            let raw = doc.slice(node.span);
            if raw.trim_start().starts_with("<!--") {
                continue;
            }
            for caps in OPENING_TAG.captures_iter(raw) {
                let Some(name) = caps.get(1) else {
                    continue;
                };
                let element = name.as_str().to_ascii_lowercase();
                if self.allowed_elements.contains(&element) {
                    continue;
                }
                let offset = node.span.start + (name.start() - 1) as u32;
                let (line, column) = doc.position(offset);
                violations.push(Violation::new(
                    Self::META.id,
                    line,
                    column,
                    format!("{} [Element: {}]", Self::META.description, element),
                ));
            }
        }
        violations
    }
}
