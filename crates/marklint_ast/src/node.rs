//! TxtNode definition.
//!
//! The core syntax tree node type handed to every rule.

use crate::{NodeType, Span};

/// A node in the syntax tree.
///
/// The `'a` lifetime ties this node to its arena allocator,
/// ensuring that all child references remain valid.
///
/// # Example
///
/// ```rust
/// use marklint_ast::{AstArena, TxtNode, NodeType, Span};
///
/// let arena = AstArena::new();
///
/// let text_node = arena.alloc(TxtNode::new_text(
///     NodeType::Str,
///     Span::new(0, 5),
///     "Hello",
/// ));
///
/// let children = arena.alloc_slice_copy(&[*text_node]);
/// let paragraph = TxtNode::new_parent(NodeType::Paragraph, Span::new(0, 5), children);
/// assert_eq!(paragraph.plain_text(), "Hello");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TxtNode<'a> {
    /// The type of this node.
    pub node_type: NodeType,

    /// Byte span in the source text.
    pub span: Span,

    /// Child nodes (for parent nodes).
    pub children: &'a [TxtNode<'a>],

    /// Text value (for text nodes like Str, Code, CodeBlock, Html).
    pub value: Option<&'a str>,

    /// Additional node-specific data.
    pub data: NodeData<'a>,
}

/// Node-specific payload.
#[derive(Debug, Clone, Copy, Default)]
pub enum NodeData<'a> {
    #[default]
    None,
    Header(HeaderData),
    List(ListData),
    CodeBlock(CodeBlockData<'a>),
    Link(LinkData<'a>),
    Reference(ReferenceData<'a>),
    Definition(DefinitionData<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderData {
    /// Heading level, 1 to 6.
    pub depth: u8,
    /// True for underlined (`===` / `---`) headings.
    pub setext: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListData {
    pub ordered: bool,
    /// Declared number of the first item (ordered lists only).
    pub start: Option<u32>,
    /// Bullet character for unordered lists, delimiter (`.` or `)`) for ordered ones.
    pub marker: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBlockData<'a> {
    pub lang: Option<&'a str>,
    pub fenced: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkData<'a> {
    pub url: &'a str,
    pub title: Option<&'a str>,
    /// Alt text for images.
    pub alt: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceData<'a> {
    pub identifier: &'a str,
    pub label: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionData<'a> {
    pub identifier: &'a str,
    pub url: &'a str,
    pub title: Option<&'a str>,
    pub label: Option<&'a str>,
}

impl<'a> TxtNode<'a> {
    /// Creates a new parent node with children.
    #[inline]
    pub const fn new_parent(node_type: NodeType, span: Span, children: &'a [TxtNode<'a>]) -> Self {
        Self {
            node_type,
            span,
            children,
            value: None,
            data: NodeData::None,
        }
    }

    /// Creates a new text node with a value.
    #[inline]
    pub const fn new_text(node_type: NodeType, span: Span, value: &'a str) -> Self {
        Self {
            node_type,
            span,
            children: &[],
            value: Some(value),
            data: NodeData::None,
        }
    }

    /// Creates a new leaf node (no children, no value).
    #[inline]
    pub const fn new_leaf(node_type: NodeType, span: Span) -> Self {
        Self {
            node_type,
            span,
            children: &[],
            value: None,
            data: NodeData::None,
        }
    }

    /// Returns this node with its data replaced.
    #[inline]
    pub const fn with_data(mut self, data: NodeData<'a>) -> Self {
        self.data = data;
        self
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if this node is a text node.
    #[inline]
    pub const fn is_text(&self) -> bool {
        self.value.is_some()
    }

    /// Heading level, for `Header` nodes.
    pub fn depth(&self) -> Option<u8> {
        match self.data {
            NodeData::Header(h) => Some(h.depth),
            _ => None,
        }
    }

    /// List attributes, for `List` nodes.
    pub fn list(&self) -> Option<ListData> {
        match self.data {
            NodeData::List(l) => Some(l),
            _ => None,
        }
    }

    /// Destination of a link, image or definition.
    pub fn url(&self) -> Option<&'a str> {
        match self.data {
            NodeData::Link(l) => Some(l.url),
            NodeData::Definition(d) => Some(d.url),
            _ => None,
        }
    }

    /// Title of a link, image or definition.
    pub fn title(&self) -> Option<&'a str> {
        match self.data {
            NodeData::Link(l) => l.title,
            NodeData::Definition(d) => d.title,
            _ => None,
        }
    }

    /// Info-string language of a code block.
    pub fn lang(&self) -> Option<&'a str> {
        match self.data {
            NodeData::CodeBlock(c) => c.lang,
            _ => None,
        }
    }

    /// Normalized identifier of a reference or definition.
    pub fn identifier(&self) -> Option<&'a str> {
        match self.data {
            NodeData::Reference(r) => Some(r.identifier),
            NodeData::Definition(d) => Some(d.identifier),
            _ => None,
        }
    }

    /// Concatenates the text of this node and all descendants.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        let mut stack = vec![self];
        while let Some(n) = stack.pop() {
            if let Some(v) = n.value
                && n.node_type != NodeType::Html
            {
                text.push_str(v);
            }
            stack.extend(n.children.iter().rev());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AstArena;

    #[test]
    fn test_new_parent() {
        let arena = AstArena::new();
        let child = arena.alloc(TxtNode::new_text(NodeType::Str, Span::new(0, 5), "hello"));
        let children = arena.alloc_slice_copy(&[*child]);
        let node = TxtNode::new_parent(NodeType::Paragraph, Span::new(0, 5), children);

        assert_eq!(node.node_type, NodeType::Paragraph);
        assert!(node.has_children());
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_new_leaf() {
        let node = TxtNode::new_leaf(NodeType::HorizontalRule, Span::new(0, 3));

        assert!(!node.is_text());
        assert!(!node.has_children());
        assert!(node.value.is_none());
    }

    #[test]
    fn test_header_depth() {
        let node = TxtNode::new_leaf(NodeType::Header, Span::new(0, 3)).with_data(
            NodeData::Header(HeaderData {
                depth: 2,
                setext: false,
            }),
        );
        assert_eq!(node.depth(), Some(2));
        assert_eq!(node.url(), None);
    }

    #[test]
    fn test_link_accessors() {
        let node = TxtNode::new_leaf(NodeType::Link, Span::new(0, 10)).with_data(NodeData::Link(
            LinkData {
                url: "https://example.com",
                title: Some("Example"),
                alt: None,
            },
        ));
        assert_eq!(node.url(), Some("https://example.com"));
        assert_eq!(node.title(), Some("Example"));
    }

    #[test]
    fn test_plain_text_skips_html() {
        let arena = AstArena::new();
        let a = TxtNode::new_text(NodeType::Str, Span::new(0, 3), "one");
        let html = TxtNode::new_text(NodeType::Html, Span::new(3, 7), "<br>");
        let b = TxtNode::new_text(NodeType::Str, Span::new(7, 10), "two");
        let emphasis_children = arena.alloc_slice_copy(&[b]);
        let emphasis = TxtNode::new_parent(NodeType::Emphasis, Span::new(7, 12), emphasis_children);
        let children = arena.alloc_slice_copy(&[a, html, emphasis]);
        let paragraph = TxtNode::new_parent(NodeType::Paragraph, Span::new(0, 12), children);

        assert_eq!(paragraph.plain_text(), "onetwo");
    }
}
