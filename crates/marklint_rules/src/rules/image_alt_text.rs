//! MD045: images have alternate text.

use marklint_ast::{NodeData, NodeType};

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct ImageAltText;

impl ImageAltText {
    pub const META: RuleMeta = RuleMeta {
        id: "MD045",
        aliases: &["no-alt-text"],
        description: "Images should have alternate text (alt text)",
        fixable: false,
    };
}

impl FromOptions for ImageAltText {
    fn from_options(_options: &RuleOptions<'_>) -> Self {
        Self
    }
}

impl Rule for ImageAltText {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        doc.nodes_of(NodeType::Image)
            .into_iter()
            .filter(|node| match node.data {
                NodeData::Link(link) => link.alt.is_none_or(|alt| alt.trim().is_empty()),
                _ => false,
            })
            .map(|node| {
                let (line, column) = doc.position(node.span.start);
                Violation::new(Self::META.id, line, column, Self::META.description)
            })
            .collect()
    }
}
