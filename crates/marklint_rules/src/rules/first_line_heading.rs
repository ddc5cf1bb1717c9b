//! MD041: the document starts with a top-level heading.

use marklint_ast::NodeType;
use regex::Regex;
use tracing::warn;

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

const DEFAULT_FRONT_MATTER_TITLE: &str = r#"^\s*"?title"?\s*[:=]"#;

pub struct FirstLineHeading {
    level: u8,
    /// Front matter matching this pattern counts as the title.
    front_matter_title: Option<Regex>,
}

impl FirstLineHeading {
    pub const META: RuleMeta = RuleMeta {
        id: "MD041",
        aliases: &["first-line-heading", "first-line-h1"],
        description: "First line in a file should be a top-level heading",
        fixable: false,
    };

    fn new(level: u8, front_matter_title: &str) -> Self {
        let front_matter_title = if front_matter_title.is_empty() {
            None
        } else {
            match Regex::new(&format!("(?m){front_matter_title}")) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!("Invalid front_matter_title pattern for MD041: {}", e);
                    None
                }
            }
        };
        Self {
            level,
            front_matter_title,
        }
    }
}

impl Default for FirstLineHeading {
    fn default() -> Self {
        Self::new(1, DEFAULT_FRONT_MATTER_TITLE)
    }
}

impl FromOptions for FirstLineHeading {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        let level = options.usize_or("level", 1).clamp(1, 6) as u8;
        Self::new(
            level,
            &options.string_or("front_matter_title", DEFAULT_FRONT_MATTER_TITLE),
        )
    }
}

impl Rule for FirstLineHeading {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mut blocks = doc.tree().children.iter().filter(|node| {
            !(node.node_type == NodeType::Html
                && doc.slice(node.span).trim_start().starts_with("<!--"))
        });

        let Some(mut first) = blocks.next() else {
            return Vec::new();
        };
        if first.node_type == NodeType::FrontMatter {
            let titled = self
                .front_matter_title
                .as_ref()
                .zip(first.value)
                .is_some_and(|(re, value)| re.is_match(value));
            if titled {
                return Vec::new();
            }
            match blocks.next() {
                Some(next) => first = next,
                None => return Vec::new(),
            }
        }

        let ok = match first.node_type {
            NodeType::Header => first.depth() == Some(self.level),
            NodeType::Html => doc
                .slice(first.span)
                .trim_start()
                .to_ascii_lowercase()
                .starts_with(&format!("<h{}", self.level)),
            _ => false,
        };
        if ok {
            return Vec::new();
        }

        vec![Violation::new(
            Self::META.id,
            doc.line_of(first.span.start),
            1,
            format!("{} [Expected: h{}]", Self::META.description, self.level),
        )]
    }
}
