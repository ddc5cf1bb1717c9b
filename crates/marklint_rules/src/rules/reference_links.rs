//! MD052: reference links and images use defined labels.

use super::references::{RefKind, scan};
use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

#[derive(Default)]
pub struct ReferenceLinks {
    /// Also report undefined `[label]` shortcut references.
    shortcut_syntax: bool,
}

impl ReferenceLinks {
    pub const META: RuleMeta = RuleMeta {
        id: "MD052",
        aliases: &["reference-links-images"],
        description: "Reference links and images should use a label that is defined",
        fixable: false,
    };
}

impl FromOptions for ReferenceLinks {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        Self {
            shortcut_syntax: options.bool_or("shortcut_syntax", false),
        }
    }
}

impl Rule for ReferenceLinks {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let refs = scan(doc);
        refs.usages
            .iter()
            .filter(|usage| usage.kind != RefKind::Shortcut || self.shortcut_syntax)
            .filter(|usage| !refs.is_defined(&usage.label))
            .map(|usage| {
                Violation::new(
                    Self::META.id,
                    usage.line,
                    usage.column,
                    format!(
                        "{} [Context: \"[{}]\"]",
                        Self::META.description,
                        usage.raw
                    ),
                )
            })
            .collect()
    }
}
