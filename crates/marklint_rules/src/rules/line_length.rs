//! MD013: line length.

use std::collections::HashSet;

use marklint_ast::NodeType;

use super::tables::table_blocks;
use crate::{Document, FromOptions, Rule, RuleMeta, RuleOptions, Violation};

pub struct LineLength {
    line_length: usize,
    heading_line_length: usize,
    code_block_line_length: usize,
    code_blocks: bool,
    tables: bool,
    headings: bool,
    strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Text,
    Heading,
    Code,
    Table,
}

impl LineLength {
    pub const META: RuleMeta = RuleMeta {
        id: "MD013",
        aliases: &["line-length"],
        description: "Line length",
        fixable: false,
    };

    fn limit(&self, kind: LineKind) -> Option<usize> {
        match kind {
            LineKind::Text => Some(self.line_length),
            LineKind::Heading => self.headings.then_some(self.heading_line_length),
            LineKind::Code => self.code_blocks.then_some(self.code_block_line_length),
            LineKind::Table => self.tables.then_some(self.line_length),
        }
    }

    fn classify(doc: &Document<'_>) -> Vec<LineKind> {
        let mut kinds = vec![LineKind::Text; doc.line_count()];
        let mut mark = |first: usize, last: usize, kind: LineKind| {
            for line in first..=last {
                if let Some(slot) = line.checked_sub(1).and_then(|i| kinds.get_mut(i)) {
                    *slot = kind;
                }
            }
        };

        for heading in doc.headings() {
            mark(heading.line, heading.end_line, LineKind::Heading);
        }
        for block in doc.nodes_of(NodeType::CodeBlock) {
            let last = block.span.end.saturating_sub(1).max(block.span.start);
            mark(doc.line_of(block.span.start), doc.line_of(last), LineKind::Code);
        }
        for range in table_blocks(doc.lines(), doc.fence_mask()) {
            mark(range.start + 1, range.end, LineKind::Table);
        }
        kinds
    }
}

impl Default for LineLength {
    fn default() -> Self {
        Self {
            line_length: 80,
            heading_line_length: 80,
            code_block_line_length: 80,
            code_blocks: true,
            tables: true,
            headings: true,
            strict: false,
        }
    }
}

impl FromOptions for LineLength {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        let defaults = Self::default();
        let line_length = options.usize_or("line_length", defaults.line_length);
        Self {
            line_length,
            heading_line_length: options.usize_or("heading_line_length", line_length),
            code_block_line_length: options.usize_or("code_block_line_length", line_length),
            code_blocks: options.bool_or("code_blocks", defaults.code_blocks),
            tables: options.bool_or("tables", defaults.tables),
            headings: options.bool_or("headings", defaults.headings),
            strict: options.bool_or("strict", defaults.strict),
        }
    }
}

impl Rule for LineLength {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let kinds = Self::classify(doc);
        let definitions: HashSet<usize> = doc
            .nodes_of(NodeType::Definition)
            .into_iter()
            .map(|node| doc.line_of(node.span.start))
            .collect();

        let mut violations = Vec::new();
        for (idx, line) in doc.lines().iter().enumerate() {
            let Some(limit) = self.limit(kinds[idx]) else {
                continue;
            };
            let length = line.chars().count();
            if length <= limit || definitions.contains(&(idx + 1)) {
                continue;
            }
            // a long unbreakable token (such as a URL) past the limit is tolerated
            if !self.strict && !line.chars().skip(limit).any(char::is_whitespace) {
                continue;
            }
            violations.push(Violation::new(
                Self::META.id,
                idx + 1,
                limit + 1,
                format!(
                    "{} [Expected: {}; Actual: {}]",
                    Self::META.description,
                    limit,
                    length
                ),
            ));
        }
        violations
    }
}
