//! MD025: a single top-level heading.

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct SingleTitle {
    level: u8,
}

impl SingleTitle {
    pub const META: RuleMeta = RuleMeta {
        id: "MD025",
        aliases: &["single-title", "single-h1"],
        description: "Multiple top-level headings in the same document",
        fixable: false,
    };
}

impl Default for SingleTitle {
    fn default() -> Self {
        Self { level: 1 }
    }
}

impl FromOptions for SingleTitle {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        let level = options.usize_or("level", 1).clamp(1, 6) as u8;
        Self { level }
    }
}

impl Rule for SingleTitle {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        doc.headings()
            .iter()
            .filter(|heading| heading.depth == self.level)
            .skip(1)
            .map(|heading| {
                Violation::new(
                    Self::META.id,
                    heading.line,
                    1,
                    format!("{} [Context: \"{}\"]", Self::META.description, heading.text),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::test_support::lines;
    use serde_json::json;

    #[test]
    fn test_second_h1() {
        assert_eq!(lines(&SingleTitle::default(), "# A\n\n## B\n\n# C\n"), vec![5]);
    }

    #[test]
    fn test_level_option() {
        let value = json!({"level": 2});
        let rule = SingleTitle::from_options(&RuleOptions::from_value("MD025", &value));
        assert_eq!(lines(&rule, "# A\n\n## B\n\n# C\n\n## D\n"), vec![7]);
    }
}
