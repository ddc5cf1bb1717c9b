//! Shared machinery for source rewrites.

use marklint_ast::AstArena;
use marklint_parser::{MarkdownParser, Parser};
use tracing::debug;

use crate::Document;

/// What to do with one physical line.
pub(crate) enum LineEdit {
    Keep,
    Replace(String),
    Remove,
}

/// Rewrites `source` line by line, preserving each line's terminator.
///
/// `edit` receives the 0-indexed line number and the line content without
/// its terminator.
pub(crate) fn rewrite_lines(source: &str, mut edit: impl FnMut(usize, &str) -> LineEdit) -> String {
    let mut out = String::with_capacity(source.len());
    for (idx, raw) in source.split_inclusive('\n').enumerate() {
        let content = raw.strip_suffix('\n').unwrap_or(raw);
        let content = content.strip_suffix('\r').unwrap_or(content);
        let terminator = &raw[content.len()..];
        match edit(idx, content) {
            LineEdit::Keep => out.push_str(raw),
            LineEdit::Replace(text) => {
                out.push_str(&text);
                out.push_str(terminator);
            }
            LineEdit::Remove => {}
        }
    }
    out
}

/// Parses `source` and hands the resulting document to `f`.
///
/// Returns `None` if the source cannot be parsed.
pub(crate) fn with_document<R>(source: &str, f: impl FnOnce(&Document<'_>) -> R) -> Option<R> {
    let arena = AstArena::for_source(source.len());
    let tree = match MarkdownParser::new().parse(&arena, source) {
        Ok(tree) => arena.alloc(tree),
        Err(e) => {
            debug!("Skipping fix, source failed to parse: {}", e);
            return None;
        }
    };
    let doc = Document::new(source, tree);
    Some(f(&doc))
}
