//! # marklint_ast
//!
//! Syntax tree definitions for marklint.
//!
//! The tree is produced by `marklint_parser` and consumed read-only by every
//! lint rule. Nodes carry byte-offset spans into the original source so that
//! rules can translate them into line/column positions.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation
//! - All nodes for a single document live in one arena
//! - Memory is freed all at once when the document has been linted
//!
//! ## Example
//!
//! ```rust
//! use marklint_ast::{AstArena, TxtNode, NodeType, Span};
//!
//! let arena = AstArena::new();
//!
//! let node = arena.alloc(TxtNode::new_parent(
//!     NodeType::Document,
//!     Span::new(0, 100),
//!     &[],
//! ));
//! assert!(!node.has_children());
//! ```

mod arena;
mod node;
mod node_type;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use node::{
    CodeBlockData, DefinitionData, HeaderData, LinkData, ListData, NodeData, ReferenceData,
    TxtNode,
};
pub use node_type::NodeType;
pub use span::Span;

pub use visitor::{VisitResult, Visitor};
