//! # marklint_parser
//!
//! Parser abstraction layer for marklint.
//!
//! This crate provides:
//! - A `Parser` trait the linter consumes
//! - The built-in Markdown parser using `markdown-rs` (CommonMark + GFM + front matter)
//!
//! Parsers convert source text into syntax tree nodes allocated in an
//! [`AstArena`](marklint_ast::AstArena). Rules never see the parser itself.
//!
//! ## Example
//!
//! ```rust
//! use marklint_parser::{MarkdownParser, Parser};
//! use marklint_ast::{AstArena, NodeType};
//!
//! let arena = AstArena::new();
//! let parser = MarkdownParser::new();
//!
//! let ast = parser.parse(&arena, "# Hello\n\nThis is a paragraph.").unwrap();
//! assert_eq!(ast.children[0].node_type, NodeType::Header);
//! ```

mod error;
mod markdown;
mod traits;

pub use error::ParseError;
pub use self::markdown::MarkdownParser;
pub use traits::Parser;
