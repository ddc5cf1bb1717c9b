//! Table discovery shared by the table rules.

use std::ops::Range;

use marklint_text::table::{column_count, is_delimiter_row, is_table_row};

/// Finds GFM tables as 0-indexed line ranges (header row first).
///
/// A table starts at a pipe row followed by a delimiter row with the same
/// number of cells and runs until the first blank or pipe-less line.
pub(crate) fn table_blocks(lines: &[&str], mask: &[bool]) -> Vec<Range<usize>> {
    let in_fence = |idx: usize| mask.get(idx).copied().unwrap_or(false);
    let mut blocks = Vec::new();
    let mut idx = 0;

    while idx + 1 < lines.len() {
        let header = lines[idx];
        let delimiter = lines[idx + 1];
        let starts_table = !in_fence(idx)
            && !in_fence(idx + 1)
            && is_table_row(header)
            && is_delimiter_row(delimiter)
            && column_count(header) == column_count(delimiter);
        if !starts_table {
            idx += 1;
            continue;
        }

        let mut end = idx + 2;
        while end < lines.len() && !in_fence(end) && is_table_row(lines[end]) {
            end += 1;
        }
        blocks.push(idx..end);
        idx = end;
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use marklint_text::{fenced_code_block_mask, split_lines};
    use pretty_assertions::assert_eq;

    fn blocks(source: &str) -> Vec<Range<usize>> {
        let lines = split_lines(source);
        table_blocks(&lines, &fenced_code_block_mask(&lines))
    }

    #[test]
    fn test_finds_table() {
        let source = "text\n\n| a | b |\n| - | - |\n| 1 | 2 |\n\nafter\n";
        assert_eq!(blocks(source), vec![2..5]);
    }

    #[test]
    fn test_requires_delimiter_row() {
        assert!(blocks("| a | b |\n| 1 | 2 |\n").is_empty());
    }

    #[test]
    fn test_ignores_fenced_tables() {
        assert!(blocks("```\n| a |\n| - |\n```\n").is_empty());
    }
}
