//! The parsed unit handed to every rule.
//!
//! A [`Document`] bundles the raw source, its physical lines, the syntax
//! tree and lazily computed derived views (fence mask, headings) so rules
//! do not recompute them.

use std::cell::OnceCell;

use marklint_ast::{NodeType, Span, TxtNode};
use marklint_text::{LineIndex, fenced_code_block_mask, split_lines};

/// A heading collected from the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1-6).
    pub depth: u8,
    /// True for underlined headings.
    pub setext: bool,
    /// Plain text content.
    pub text: String,
    /// First line of the heading (1-indexed).
    pub line: usize,
    /// Last line of the heading, including a setext underline (1-indexed).
    pub end_line: usize,
    pub span: Span,
}

/// Source text plus everything derived from it.
pub struct Document<'a> {
    source: &'a str,
    lines: Vec<&'a str>,
    tree: &'a TxtNode<'a>,
    index: LineIndex,
    fence_mask: OnceCell<Vec<bool>>,
    headings: OnceCell<Vec<Heading>>,
}

impl<'a> Document<'a> {
    /// Creates a document over `source` and its parsed `tree`.
    ///
    /// An empty source is a single empty line, so every document has a
    /// line 1 to report against.
    pub fn new(source: &'a str, tree: &'a TxtNode<'a>) -> Self {
        let mut lines = split_lines(source);
        if lines.is_empty() {
            lines.push("");
        }
        Self {
            source,
            lines,
            tree,
            index: LineIndex::new(source),
            fence_mask: OnceCell::new(),
            headings: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Physical lines without terminators.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Returns the 1-indexed line, if present.
    pub fn line(&self, line: usize) -> Option<&'a str> {
        line.checked_sub(1)
            .and_then(|idx| self.lines.get(idx).copied())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn tree(&self) -> &'a TxtNode<'a> {
        self.tree
    }

    /// Per-line flags marking lines strictly inside fenced code blocks.
    pub fn fence_mask(&self) -> &[bool] {
        self.fence_mask
            .get_or_init(|| fenced_code_block_mask(&self.lines))
    }

    /// Returns true if the 0-indexed line lies inside a fenced code block.
    pub fn in_fence(&self, idx: usize) -> bool {
        self.fence_mask().get(idx).copied().unwrap_or(false)
    }

    /// Converts a byte offset into a 1-indexed `(line, column)` pair.
    pub fn position(&self, offset: u32) -> (usize, usize) {
        self.index.position(self.source, offset as usize)
    }

    /// 1-indexed line of a byte offset.
    pub fn line_of(&self, offset: u32) -> usize {
        self.position(offset).0
    }

    /// Returns the source text covered by `span`.
    pub fn slice(&self, span: Span) -> &'a str {
        span.slice(self.source).unwrap_or("")
    }

    /// All headings in document order.
    pub fn headings(&self) -> &[Heading] {
        self.headings.get_or_init(|| self.collect_headings())
    }

    /// Collects every node of `node_type` in document order.
    pub fn nodes_of(&self, node_type: NodeType) -> Vec<&'a TxtNode<'a>> {
        let mut found = Vec::new();
        let mut stack = vec![self.tree];
        while let Some(node) = stack.pop() {
            if node.node_type == node_type {
                found.push(node);
            }
            stack.extend(node.children.iter().rev());
        }
        found
    }

    fn collect_headings(&self) -> Vec<Heading> {
        self.nodes_of(NodeType::Header)
            .into_iter()
            .filter_map(|node| {
                let (depth, setext) = match node.data {
                    marklint_ast::NodeData::Header(h) => (h.depth, h.setext),
                    _ => return None,
                };
                let line = self.line_of(node.span.start);
                // span.end sits just past the heading, possibly on the next line start
                let end_line = self.line_of(node.span.end.saturating_sub(1).max(node.span.start));
                Some(Heading {
                    depth,
                    setext,
                    text: node.plain_text().trim().to_string(),
                    line,
                    end_line,
                    span: node.span,
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("len", &self.source.len())
            .field("lines", &self.lines.len())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use marklint_ast::AstArena;
    use marklint_parser::{MarkdownParser, Parser};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_headings_collected_in_order() {
        let source = "# One\n\nText\n\nTwo\n---\n\n### Three\n";
        let arena = AstArena::new();
        let tree = arena.alloc(MarkdownParser::new().parse(&arena, source).unwrap());
        let doc = Document::new(source, tree);

        let headings = doc.headings();
        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0].text, "One");
        assert_eq!((headings[1].line, headings[1].end_line), (5, 6));
        assert!(headings[1].setext);
        assert_eq!(headings[2].depth, 3);
        assert_eq!(headings[2].line, 8);
    }

    #[test]
    fn test_line_accessors() {
        let source = "a\n```\nb\n```\n";
        let arena = AstArena::new();
        let tree = arena.alloc(MarkdownParser::new().parse(&arena, source).unwrap());
        let doc = Document::new(source, tree);

        assert_eq!(doc.line_count(), 4);
        assert_eq!(doc.line(1), Some("a"));
        assert_eq!(doc.line(0), None);
        assert!(doc.in_fence(2));
        assert!(!doc.in_fence(3));
        assert_eq!(doc.position(2), (2, 1));
    }

    #[test]
    fn test_empty_source_has_one_line() {
        let arena = AstArena::new();
        let tree = arena.alloc(MarkdownParser::new().parse(&arena, "").unwrap());
        let doc = Document::new("", tree);

        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line(1), Some(""));
        assert!(!doc.in_fence(1));
    }
}
