//! Walk functions for tree traversal.

use std::ops::ControlFlow;

use crate::{NodeType, TxtNode};

use super::visit::{VisitResult, Visitor};

/// Walks a node by dispatching to the appropriate type-specific visitor method.
///
/// Calls `enter_node`, the type-specific `visit_*` method, then `exit_node`.
pub fn walk_node<'a, V>(visitor: &mut V, node: &TxtNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    visitor.enter_node(node)?;

    match node.node_type {
        NodeType::Header => visitor.visit_header(node),
        NodeType::List => visitor.visit_list(node),
        NodeType::CodeBlock => visitor.visit_code_block(node),
        NodeType::Html => visitor.visit_html(node),
        NodeType::Str => visitor.visit_str(node),
        NodeType::Link => visitor.visit_link(node),
        NodeType::Image => visitor.visit_image(node),
        NodeType::Definition => visitor.visit_definition(node),
        _ => visitor.visit_other(node),
    }?;

    visitor.exit_node(node)
}

/// Walks all children of a node in order.
pub fn walk_children<'a, V>(visitor: &mut V, node: &TxtNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in node.children {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstArena, Span};

    struct DepthCounter {
        headers: usize,
        max_depth: usize,
        depth: usize,
    }

    impl<'a> Visitor<'a> for DepthCounter {
        fn enter_node(&mut self, _node: &TxtNode<'a>) -> VisitResult {
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
            ControlFlow::Continue(())
        }

        fn exit_node(&mut self, _node: &TxtNode<'a>) -> VisitResult {
            self.depth -= 1;
            ControlFlow::Continue(())
        }

        fn visit_header(&mut self, node: &TxtNode<'a>) -> VisitResult {
            self.headers += 1;
            walk_children(self, node)
        }
    }

    struct StopAtFirstStr {
        seen: usize,
    }

    impl<'a> Visitor<'a> for StopAtFirstStr {
        fn visit_str(&mut self, _node: &TxtNode<'a>) -> VisitResult {
            self.seen += 1;
            ControlFlow::Break(())
        }
    }

    fn sample<'a>(arena: &'a AstArena) -> TxtNode<'a> {
        let a = TxtNode::new_text(NodeType::Str, Span::new(2, 3), "a");
        let b = TxtNode::new_text(NodeType::Str, Span::new(6, 7), "b");
        let h1 = TxtNode::new_parent(NodeType::Header, Span::new(0, 3), arena.alloc_slice_copy(&[a]));
        let h2 = TxtNode::new_parent(NodeType::Header, Span::new(4, 7), arena.alloc_slice_copy(&[b]));
        TxtNode::new_parent(NodeType::Document, Span::new(0, 7), arena.alloc_slice_copy(&[h1, h2]))
    }

    #[test]
    fn test_walk_visits_every_header() {
        let arena = AstArena::new();
        let doc = sample(&arena);
        let mut counter = DepthCounter {
            headers: 0,
            max_depth: 0,
            depth: 0,
        };

        let result = walk_node(&mut counter, &doc);

        assert!(result.is_continue());
        assert_eq!(counter.headers, 2);
        assert_eq!(counter.max_depth, 3);
        assert_eq!(counter.depth, 0);
    }

    #[test]
    fn test_walk_breaks_early() {
        let arena = AstArena::new();
        let doc = sample(&arena);
        let mut visitor = StopAtFirstStr { seen: 0 };

        let result = walk_node(&mut visitor, &doc);

        assert!(result.is_break());
        assert_eq!(visitor.seen, 1);
    }
}
