//! # marklint_text
//!
//! Text classification primitives shared by lint rules.
//!
//! - [`split_lines`] / [`LineIndex`] - physical lines and offset translation
//! - [`fenced_code_block_mask`] - which lines sit inside a fenced code block
//! - [`table`] - pipe-table row helpers

mod fence;
mod lines;
pub mod table;

pub use fence::{FenceState, fenced_code_block_mask, parse_fence_opener};
pub use lines::{LineIndex, count_line, indentation, is_blank, split_lines};
