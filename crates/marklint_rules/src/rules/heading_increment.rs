//! MD001: heading levels increase by at most one.

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct HeadingIncrement;

impl HeadingIncrement {
    pub const META: RuleMeta = RuleMeta {
        id: "MD001",
        aliases: &["heading-increment"],
        description: "Heading levels should only increment by one level at a time",
        fixable: false,
    };
}

impl FromOptions for HeadingIncrement {
    fn from_options(_options: &RuleOptions<'_>) -> Self {
        Self
    }
}

impl Rule for HeadingIncrement {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut previous: Option<u8> = None;

        for heading in doc.headings() {
            if let Some(prev) = previous
                && heading.depth > prev + 1
            {
                violations.push(Violation::new(
                    Self::META.id,
                    heading.line,
                    1,
                    format!(
                        "{} [Expected: h{}; Actual: h{}]",
                        Self::META.description,
                        prev + 1,
                        heading.depth
                    ),
                ));
            }
            previous = Some(heading.depth);
        }

        violations
    }
}
