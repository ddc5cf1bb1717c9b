//! MD040: fenced code blocks declare a language.

use std::ops::ControlFlow;

use marklint_ast::visitor::{VisitResult, Visitor, walk_node};
use marklint_ast::{NodeData, Span, TxtNode};

use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

/// Collects fenced code blocks, including those nested in lists and quotes.
#[derive(Default)]
struct FenceCollector<'a> {
    fences: Vec<(Span, Option<&'a str>)>,
}

impl<'a> Visitor<'a> for FenceCollector<'a> {
    fn visit_code_block(&mut self, node: &TxtNode<'a>) -> VisitResult {
        if let NodeData::CodeBlock(code) = node.data
            && code.fenced
        {
            self.fences.push((node.span, code.lang));
        }
        ControlFlow::Continue(())
    }
}

#[derive(Default)]
pub struct FencedCodeLanguage {
    /// Empty means any language is accepted.
    allowed_languages: Vec<String>,
}

impl FencedCodeLanguage {
    pub const META: RuleMeta = RuleMeta {
        id: "MD040",
        aliases: &["fenced-code-language"],
        description: "Fenced code blocks should have a language specified",
        fixable: false,
    };
}

impl FromOptions for FencedCodeLanguage {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        Self {
            allowed_languages: options.string_list_or("allowed_languages", &[]),
        }
    }
}

impl Rule for FencedCodeLanguage {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mut collector = FenceCollector::default();
        let _ = walk_node(&mut collector, doc.tree());

        let mut violations = Vec::new();
        for (span, lang) in collector.fences {
            let message = match lang {
                None => Self::META.description.to_string(),
                Some(lang)
                    if !self.allowed_languages.is_empty()
                        && !self.allowed_languages.iter().any(|l| l == lang) =>
                {
                    format!("Language not allowed [Context: \"{lang}\"]")
                }
                Some(_) => continue,
            };
            let (line, column) = doc.position(span.start);
            violations.push(Violation::new(Self::META.id, line, column, message));
        }
        violations
    }
}
