//! Reference label extraction shared by MD052 and MD053.
//!
//! Both rules scan the same lines with the same patterns so that a label
//! one rule considers used is never reported as unused by the other.

use std::sync::LazyLock;

use regex::Regex;

use crate::Document;

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}\[((?:[^\[\]\\]|\\.)+)\]:\s*(\S*)").expect("valid regex")
});

static BRACKETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[((?:[^\[\]\\]|\\.)*)\](?:\[((?:[^\[\]\\]|\\.)*)\])?").expect("valid regex")
});

/// How a label was referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefKind {
    /// `[text][label]`
    Full,
    /// `[label][]`
    Collapsed,
    /// `[label]`
    Shortcut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Definition {
    /// Folded label.
    pub label: String,
    /// Label as written.
    pub raw: String,
    pub url: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Usage {
    /// Folded label.
    pub label: String,
    /// Label as written.
    pub raw: String,
    pub kind: RefKind,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Default)]
pub(crate) struct References {
    pub definitions: Vec<Definition>,
    pub usages: Vec<Usage>,
}

impl References {
    pub fn is_defined(&self, label: &str) -> bool {
        self.definitions.iter().any(|d| d.label == label)
    }

    pub fn is_used(&self, label: &str) -> bool {
        self.usages.iter().any(|u| u.label == label)
    }
}

/// Normalizes a label for comparison: case-folded, whitespace collapsed.
pub(crate) fn fold_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Blanks out inline code spans, keeping character positions.
fn mask_code_spans(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = chars.clone();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '`' {
            i += 1;
            continue;
        }
        let run = chars[i..].iter().take_while(|&&c| c == '`').count();
        let body = i + run;
        let close = (body..chars.len()).find(|&j| {
            chars[j] == '`'
                && chars[j..].iter().take_while(|&&c| c == '`').count() == run
                && (j == 0 || chars[j - 1] != '`')
        });
        match close {
            Some(end) => {
                for c in &mut out[body..end] {
                    *c = ' ';
                }
                i = end + run;
            }
            None => i = body,
        }
    }
    out.into_iter().collect()
}

/// Scans definitions and usages outside fenced code blocks.
pub(crate) fn scan(doc: &Document<'_>) -> References {
    let mut refs = References::default();

    for (idx, line) in doc.lines().iter().enumerate() {
        if doc.in_fence(idx) {
            continue;
        }
        let line = mask_code_spans(line);

        if let Some(caps) = DEFINITION.captures(&line) {
            let raw = &caps[1];
            if !raw.starts_with('^') {
                refs.definitions.push(Definition {
                    label: fold_label(raw),
                    raw: raw.to_string(),
                    url: caps[2].to_string(),
                    line: idx + 1,
                    column: line.len() - line.trim_start().len() + 1,
                });
            }
            continue;
        }

        for caps in BRACKETS.captures_iter(&line) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let text = &caps[1];
            let (kind, raw) = match caps.get(2) {
                Some(label) if !label.as_str().is_empty() => (RefKind::Full, label.as_str()),
                Some(_) => (RefKind::Collapsed, text),
                None => {
                    let next = line[whole.end()..].chars().next();
                    if matches!(next, Some('(') | Some(':')) {
                        continue;
                    }
                    (RefKind::Shortcut, text)
                }
            };
            let label = fold_label(raw);
            // footnotes and task list checkboxes
            if label.is_empty() || raw.starts_with('^') || (kind == RefKind::Shortcut && label == "x")
            {
                continue;
            }
            refs.usages.push(Usage {
                label,
                raw: raw.to_string(),
                kind,
                line: idx + 1,
                column: line[..whole.start()].chars().count() + 1,
            });
        }
    }

    refs
}
