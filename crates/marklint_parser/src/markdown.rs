//! Markdown parser using markdown-rs (wooorm/markdown-rs).
//!
//! Converts mdast into the linter's syntax tree, keeping byte-offset spans
//! and the few attributes rules need that mdast leaves implicit
//! (heading style, list marker, fenced vs. indented code).

use ::markdown::mdast::Node;
use ::markdown::{ParseOptions, to_mdast};
use marklint_ast::{
    AstArena, CodeBlockData, DefinitionData, HeaderData, LinkData, ListData, NodeData, NodeType,
    ReferenceData, Span, TxtNode,
};

use crate::{ParseError, Parser};

/// Markdown parser implementation.
///
/// Supports CommonMark, GFM (tables, strikethrough, autolinks, footnotes)
/// and YAML/TOML front matter.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownParser;

impl MarkdownParser {
    /// Creates a new Markdown parser with default options.
    pub fn new() -> Self {
        Self
    }

    fn default_options() -> ParseOptions {
        let mut options = ParseOptions::gfm();
        options.constructs.frontmatter = true;
        options
    }

    fn convert_node<'a>(&self, arena: &'a AstArena, node: &Node, source: &str) -> TxtNode<'a> {
        match node {
            Node::Root(root) => {
                self.create_parent_node(arena, node, &root.children, source, NodeType::Document)
            }

            Node::Yaml(yaml) => {
                self.create_text_node(arena, node, &yaml.value, NodeType::FrontMatter)
            }

            Node::Toml(toml) => {
                self.create_text_node(arena, node, &toml.value, NodeType::FrontMatter)
            }

            Node::Paragraph(para) => {
                self.create_parent_node(arena, node, &para.children, source, NodeType::Paragraph)
            }

            Node::Heading(heading) => {
                let converted = self.create_parent_node(
                    arena,
                    node,
                    &heading.children,
                    source,
                    NodeType::Header,
                );
                let setext = !span_text(converted.span, source)
                    .trim_start()
                    .starts_with('#');
                converted.with_data(NodeData::Header(HeaderData {
                    depth: heading.depth,
                    setext,
                }))
            }

            Node::Text(text) => self.create_text_node(arena, node, &text.value, NodeType::Str),

            Node::Emphasis(em) => {
                self.create_parent_node(arena, node, &em.children, source, NodeType::Emphasis)
            }

            Node::Strong(strong) => {
                self.create_parent_node(arena, node, &strong.children, source, NodeType::Strong)
            }

            Node::Delete(del) => {
                self.create_parent_node(arena, node, &del.children, source, NodeType::Delete)
            }

            Node::InlineCode(code) => {
                self.create_text_node(arena, node, &code.value, NodeType::Code)
            }

            Node::Code(code) => {
                let converted = self.create_text_node(arena, node, &code.value, NodeType::CodeBlock);
                let head = span_text(converted.span, source).trim_start();
                let fenced = head.starts_with("```") || head.starts_with("~~~");
                converted.with_data(NodeData::CodeBlock(CodeBlockData {
                    lang: code.lang.as_deref().map(|l| arena.alloc_str(l)),
                    fenced,
                }))
            }

            Node::Link(link) => {
                let converted =
                    self.create_parent_node(arena, node, &link.children, source, NodeType::Link);
                converted.with_data(NodeData::Link(LinkData {
                    url: arena.alloc_str(&link.url),
                    title: link.title.as_deref().map(|t| arena.alloc_str(t)),
                    alt: None,
                }))
            }

            Node::Image(image) => {
                self.create_leaf_node(node, NodeType::Image)
                    .with_data(NodeData::Link(LinkData {
                        url: arena.alloc_str(&image.url),
                        title: image.title.as_deref().map(|t| arena.alloc_str(t)),
                        alt: Some(arena.alloc_str(&image.alt)),
                    }))
            }

            Node::List(list) => {
                let converted =
                    self.create_parent_node(arena, node, &list.children, source, NodeType::List);
                let marker = converted
                    .children
                    .first()
                    .and_then(|item| list_marker(span_text(item.span, source), list.ordered))
                    .unwrap_or(if list.ordered { '.' } else { '-' });
                converted.with_data(NodeData::List(ListData {
                    ordered: list.ordered,
                    start: list.start,
                    marker,
                }))
            }

            Node::ListItem(item) => {
                self.create_parent_node(arena, node, &item.children, source, NodeType::ListItem)
            }

            Node::Blockquote(quote) => {
                self.create_parent_node(arena, node, &quote.children, source, NodeType::BlockQuote)
            }

            Node::ThematicBreak(_) => self.create_leaf_node(node, NodeType::HorizontalRule),

            Node::Break(_) => self.create_leaf_node(node, NodeType::Break),

            Node::Html(html) => self.create_text_node(arena, node, &html.value, NodeType::Html),

            Node::Table(table) => {
                self.create_parent_node(arena, node, &table.children, source, NodeType::Table)
            }

            Node::TableRow(row) => {
                self.create_parent_node(arena, node, &row.children, source, NodeType::TableRow)
            }

            Node::TableCell(cell) => {
                self.create_parent_node(arena, node, &cell.children, source, NodeType::TableCell)
            }

            Node::FootnoteDefinition(def) => self
                .create_parent_node(
                    arena,
                    node,
                    &def.children,
                    source,
                    NodeType::FootnoteDefinition,
                )
                .with_data(NodeData::Reference(ReferenceData {
                    identifier: arena.alloc_str(&def.identifier),
                    label: def.label.as_deref().map(|l| arena.alloc_str(l)),
                })),

            Node::FootnoteReference(reference) => self
                .create_leaf_node(node, NodeType::FootnoteReference)
                .with_data(NodeData::Reference(ReferenceData {
                    identifier: arena.alloc_str(&reference.identifier),
                    label: reference.label.as_deref().map(|l| arena.alloc_str(l)),
                })),

            Node::LinkReference(reference) => self
                .create_parent_node(
                    arena,
                    node,
                    &reference.children,
                    source,
                    NodeType::LinkReference,
                )
                .with_data(NodeData::Reference(ReferenceData {
                    identifier: arena.alloc_str(&reference.identifier),
                    label: reference.label.as_deref().map(|l| arena.alloc_str(l)),
                })),

            Node::ImageReference(reference) => self
                .create_leaf_node(node, NodeType::ImageReference)
                .with_data(NodeData::Reference(ReferenceData {
                    identifier: arena.alloc_str(&reference.identifier),
                    label: reference.label.as_deref().map(|l| arena.alloc_str(l)),
                })),

            Node::Definition(def) => self.create_leaf_node(node, NodeType::Definition).with_data(
                NodeData::Definition(DefinitionData {
                    identifier: arena.alloc_str(&def.identifier),
                    url: arena.alloc_str(&def.url),
                    title: def.title.as_deref().map(|t| arena.alloc_str(t)),
                    label: def.label.as_deref().map(|l| arena.alloc_str(l)),
                }),
            ),

            // Math and MDX constructs are not enabled; keep their text reachable.
            _ => self.create_leaf_node(node, NodeType::Html),
        }
    }

    fn create_parent_node<'a>(
        &self,
        arena: &'a AstArena,
        node: &Node,
        children: &[Node],
        source: &str,
        node_type: NodeType,
    ) -> TxtNode<'a> {
        let children = arena.alloc_slice_fill_iter(
            children
                .iter()
                .map(|child| self.convert_node(arena, child, source)),
        );
        TxtNode::new_parent(node_type, node_span(node), children)
    }

    fn create_text_node<'a>(
        &self,
        arena: &'a AstArena,
        node: &Node,
        text: &str,
        node_type: NodeType,
    ) -> TxtNode<'a> {
        TxtNode::new_text(node_type, node_span(node), arena.alloc_str(text))
    }

    fn create_leaf_node<'a>(&self, node: &Node, node_type: NodeType) -> TxtNode<'a> {
        TxtNode::new_leaf(node_type, node_span(node))
    }
}

fn node_span(node: &Node) -> Span {
    node.position()
        .map(|pos| Span::new(pos.start.offset as u32, pos.end.offset as u32))
        .unwrap_or_default()
}

fn span_text(span: Span, source: &str) -> &str {
    span.slice(source).unwrap_or("")
}

/// Reads the bullet (or ordered delimiter) at the start of a list item.
fn list_marker(item_text: &str, ordered: bool) -> Option<char> {
    let rest = item_text.trim_start_matches([' ', '\t', '>']);
    if ordered {
        rest.trim_start_matches(|c: char| c.is_ascii_digit())
            .chars()
            .next()
            .filter(|c| matches!(c, '.' | ')'))
    } else {
        rest.chars().next().filter(|c| matches!(c, '-' | '*' | '+'))
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown", "mdown", "mkdn", "mkd"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError> {
        if u32::try_from(source.len()).is_err() {
            return Err(ParseError::TooLarge(source.len()));
        }

        let mdast = to_mdast(source, &Self::default_options())
            .map_err(|e| ParseError::invalid_source(e.to_string()))?;

        Ok(self.convert_node(arena, &mdast, source))
    }
}
