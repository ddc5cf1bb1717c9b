//! Pipe-table row helpers.
//!
//! These work on raw lines, independent of the parsed tree, so lexical
//! rules can inspect table layout (leading/trailing pipes, cell counts).

/// Returns true if the line looks like a pipe-table row.
pub fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    !split_unescaped_pipes(trimmed).is_empty()
}

/// Returns true if the line is a delimiter row such as `| --- | :-: |`.
pub fn is_delimiter_row(line: &str) -> bool {
    let cells = split_table_row(line);
    !cells.is_empty()
        && cells.iter().all(|cell| {
            let cell = cell.trim();
            let dashes = cell.trim_start_matches(':').trim_end_matches(':');
            !dashes.is_empty() && dashes.chars().all(|c| c == '-')
        })
}

/// Returns true if the row starts with a pipe (ignoring indentation).
pub fn has_leading_pipe(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// Returns true if the row ends with an unescaped pipe.
pub fn has_trailing_pipe(line: &str) -> bool {
    let trimmed = line.trim_end();
    trimmed.ends_with('|') && !trimmed.ends_with("\\|")
}

/// Splits a table row into its cells.
///
/// A leading and a trailing pipe delimit the row and do not create empty
/// cells. Escaped pipes (`\|`) and pipes inside code spans stay in the cell.
pub fn split_table_row(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    let mut body = trimmed.strip_prefix('|').unwrap_or(trimmed);
    if has_trailing_pipe(body) {
        body = &body[..body.len() - 1];
    }
    if body.trim().is_empty() && trimmed.len() <= 2 {
        return Vec::new();
    }
    let positions = split_unescaped_pipes(body);
    let mut cells = Vec::with_capacity(positions.len() + 1);
    let mut start = 0;
    for pos in positions {
        cells.push(&body[start..pos]);
        start = pos + 1;
    }
    cells.push(&body[start..]);
    cells
}

/// Number of cells in a table row.
pub fn column_count(line: &str) -> usize {
    split_table_row(line).len()
}

/// Byte positions of pipes that act as cell separators.
fn split_unescaped_pipes(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut positions = Vec::new();
    let mut code_run: Option<usize> = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'`' => {
                let run = bytes[i..].iter().take_while(|&&b| b == b'`').count();
                code_run = match code_run {
                    None => Some(run),
                    Some(open) if open == run => None,
                    other => other,
                };
                i += run;
                continue;
            }
            b'|' if code_run.is_none() => positions.push(i),
            _ => {}
        }
        i += 1;
    }
    positions
}
