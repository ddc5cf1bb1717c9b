//! MD024: headings with duplicate content.

use std::collections::HashSet;

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

#[derive(Default)]
pub struct DuplicateHeading {
    siblings_only: bool,
}

impl DuplicateHeading {
    pub const META: RuleMeta = RuleMeta {
        id: "MD024",
        aliases: &["no-duplicate-heading"],
        description: "Multiple headings with the same content",
        fixable: false,
    };
}

impl FromOptions for DuplicateHeading {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        let legacy = options.bool_or("allow_different_nesting", false);
        Self {
            siblings_only: options.bool_or("siblings_only", legacy),
        }
    }
}

impl Rule for DuplicateHeading {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();
        // (parent heading index, text); the parent is None unless siblings_only
        let mut seen: HashSet<(Option<usize>, &str)> = HashSet::new();
        let mut ancestors: Vec<(u8, usize)> = Vec::new();

        for (idx, heading) in doc.headings().iter().enumerate() {
            while ancestors.last().is_some_and(|&(depth, _)| depth >= heading.depth) {
                ancestors.pop();
            }
            let parent = if self.siblings_only {
                ancestors.last().map(|&(_, i)| i)
            } else {
                None
            };
            ancestors.push((heading.depth, idx));

            if heading.text.is_empty() {
                continue;
            }
            if !seen.insert((parent, heading.text.as_str())) {
                violations.push(Violation::new(
                    Self::META.id,
                    heading.line,
                    1,
                    format!("{} [Context: \"{}\"]", Self::META.description, heading.text),
                ));
            }
        }
        violations
    }
}
