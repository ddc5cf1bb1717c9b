//! MD053: reference definitions are used.

use std::collections::HashSet;

use super::references::scan;
use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct LinkDefinitions {
    /// Folded labels that may stay unused (`//` is the comment idiom).
    ignored_definitions: Vec<String>,
}

impl LinkDefinitions {
    pub const META: RuleMeta = RuleMeta {
        id: "MD053",
        aliases: &["link-image-reference-definitions"],
        description: "Link and image reference definitions should be needed",
        fixable: false,
    };
}

impl Default for LinkDefinitions {
    fn default() -> Self {
        Self {
            ignored_definitions: vec!["//".to_string()],
        }
    }
}

impl FromOptions for LinkDefinitions {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        Self {
            ignored_definitions: options
                .string_list_or("ignored_definitions", &["//"])
                .iter()
                .map(|label| super::references::fold_label(label))
                .collect(),
        }
    }
}

impl Rule for LinkDefinitions {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let refs = scan(doc);
        let mut seen = HashSet::new();
        let mut violations = Vec::new();

        for def in &refs.definitions {
            if self.ignored_definitions.contains(&def.label) {
                continue;
            }
            let message = if !seen.insert(def.label.as_str()) {
                "Duplicate link or image reference definition"
            } else if !refs.is_used(&def.label) {
                "Unused link or image reference definition"
            } else {
                continue;
            };
            violations.push(Violation::new(
                Self::META.id,
                def.line,
                def.column,
                format!("{} [Context: \"[{}]: {}\"]", message, def.raw, def.url),
            ));
        }
        violations
    }
}
