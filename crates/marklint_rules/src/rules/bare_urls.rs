//! MD034: bare URLs.

use marklint_ast::NodeType;

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct BareUrls;

impl BareUrls {
    pub const META: RuleMeta = RuleMeta {
        id: "MD034",
        aliases: &["no-bare-urls"],
        description: "Bare URL used",
        fixable: false,
    };
}

impl FromOptions for BareUrls {
    fn from_options(_options: &RuleOptions<'_>) -> Self {
        Self
    }
}

impl Rule for BareUrls {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        // GFM autolink literals parse as links whose source is the bare URL
        doc.nodes_of(NodeType::Link)
            .into_iter()
            .filter(|node| {
                let raw = doc.slice(node.span);
                !raw.starts_with('<') && !raw.starts_with('[')
            })
            .map(|node| {
                let (line, column) = doc.position(node.span.start);
                Violation::new(
                    Self::META.id,
                    line,
                    column,
                    format!(
                        "{} [Context: \"{}\"]",
                        Self::META.description,
                        doc.slice(node.span)
                    ),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::test_support::run;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_url() {
        let violations = run(&BareUrls, "See https://example.com for more.\n");
        assert_eq!(violations.len(), 1);
        assert_eq!((violations[0].line, violations[0].column), (1, 5));
        assert!(violations[0].message.contains("https://example.com"));
    }

    #[test]
    fn test_wrapped_urls_fine() {
        let source = "<https://a.example>\n\n[a](https://b.example)\n\n`https://c.example`\n";
        assert!(run(&BareUrls, source).is_empty());
    }
}
