//! Line splitting and byte offset translation.

/// Splits source text into physical lines.
///
/// Lines are newline-stripped and a trailing `\r` is removed. A final
/// trailing newline does not produce an extra empty line.
pub fn split_lines(source: &str) -> Vec<&str> {
    source
        .split_inclusive('\n')
        .map(|line| {
            let line = line.strip_suffix('\n').unwrap_or(line);
            line.strip_suffix('\r').unwrap_or(line)
        })
        .collect()
}

/// Converts a byte offset into a 1-based line number.
///
/// Offsets past the end of `source` count the newlines of the whole text.
pub fn count_line(source: &str, byte_offset: usize) -> usize {
    let end = byte_offset.min(source.len());
    1 + source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count()
}

/// Visual indentation of a line in columns (tabs advance to the next multiple of 4).
pub fn indentation(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width = (width + 4) / 4 * 4,
            _ => break,
        }
    }
    width
}

/// Returns true if the line contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Pre-computed line start offsets for fast offset → position lookup.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    /// Builds the index for `source`.
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { starts }
    }

    /// Byte offset where the 1-based `line` starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1).and_then(|idx| self.starts.get(idx).copied())
    }

    /// Converts a byte offset into a 1-based `(line, column)` pair.
    ///
    /// Columns count characters, not bytes.
    pub fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let offset = offset.min(source.len());
        let idx = self.starts.partition_point(|&start| start <= offset) - 1;
        let start = self.starts[idx];
        let column = source
            .get(start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - start);
        (idx + 1, column + 1)
    }
}
