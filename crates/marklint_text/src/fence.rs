//! Fenced code block detection.

/// Scanner state while walking lines in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FenceState {
    open: Option<(char, usize)>,
}

impl FenceState {
    /// Returns true while inside an open fence.
    pub fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feeds one line; returns true if the line lies strictly inside a fence.
    ///
    /// Delimiter lines themselves return false.
    pub fn advance(&mut self, line: &str) -> bool {
        match self.open {
            None => {
                if let Some(opener) = parse_fence_opener(line) {
                    self.open = Some(opener);
                }
                false
            }
            Some((fence_char, fence_len)) => {
                if is_fence_closer(line, fence_char, fence_len) {
                    self.open = None;
                    false
                } else {
                    true
                }
            }
        }
    }
}

/// Parses a fence opener, returning the fence character and run length.
pub fn parse_fence_opener(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start_matches(' ');
    let fence_char = trimmed.chars().next().filter(|c| matches!(c, '`' | '~'))?;
    let run = trimmed.chars().take_while(|&c| c == fence_char).count();
    (run >= 3).then_some((fence_char, run))
}

fn is_fence_closer(line: &str, fence_char: char, fence_len: usize) -> bool {
    let trimmed = line.trim_start_matches(' ');
    let run = trimmed.chars().take_while(|&c| c == fence_char).count();
    run >= fence_len && trimmed[run * fence_char.len_utf8()..].trim().is_empty()
}

/// Marks every line that lies strictly inside a fenced code block.
///
/// An unterminated fence extends to the end of the document.
pub fn fenced_code_block_mask(lines: &[&str]) -> Vec<bool> {
    let mut state = FenceState::default();
    lines.iter().map(|line| state.advance(line)).collect()
}
