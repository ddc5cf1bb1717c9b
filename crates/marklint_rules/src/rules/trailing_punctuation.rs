//! MD026: trailing punctuation in heading text.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::fix::{LineEdit, rewrite_lines, with_document};
use crate::{Document, FromOptions, Heading, Rule, RuleMeta, RuleOptions, Violation};

static TRAILING_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#?[[:alnum:]]+;$").expect("valid regex"));

const DEFAULT_PUNCTUATION: &str = ".,;:!。，；：！";

pub struct TrailingPunctuation {
    punctuation: String,
}

impl TrailingPunctuation {
    pub const META: RuleMeta = RuleMeta {
        id: "MD026",
        aliases: &["no-trailing-punctuation"],
        description: "Trailing punctuation in heading",
        fixable: true,
    };

    /// 1-indexed line holding the end of the heading text.
    fn text_line(heading: &Heading) -> usize {
        if heading.setext {
            heading.end_line.saturating_sub(1).max(heading.line)
        } else {
            heading.line
        }
    }

    /// Byte range of trailing punctuation on a heading text line.
    fn trailing(&self, line: &str, setext: bool) -> Option<Range<usize>> {
        let text = text_range(line, setext);
        let content = &line[text.clone()];
        if TRAILING_ENTITY.is_match(content) {
            return None;
        }
        let kept = content.trim_end_matches(|c| self.punctuation.contains(c));
        (kept.len() < content.len()).then(|| text.start + kept.len()..text.end)
    }

    /// Punctuation to strip, keyed by 0-indexed line.
    fn findings(&self, doc: &Document<'_>) -> HashMap<usize, Range<usize>> {
        let mut found = HashMap::new();
        for heading in doc.headings() {
            let line_no = Self::text_line(heading);
            let Some(line) = doc.line(line_no) else {
                continue;
            };
            if let Some(range) = self.trailing(line, heading.setext) {
                found.insert(line_no - 1, range);
            }
        }
        found
    }
}

/// Byte range of the heading text on its line, without ATX markers.
fn text_range(line: &str, setext: bool) -> Range<usize> {
    let indent = line.len() - line.trim_start().len();
    let start = if setext {
        indent
    } else {
        let hashes = indent + line[indent..].bytes().take_while(|&b| b == b'#').count();
        hashes + (line[hashes..].len() - line[hashes..].trim_start().len())
    };
    let mut body = line[start..].trim_end();
    if !setext {
        let without = body.trim_end_matches('#');
        if without.len() < body.len() && (without.is_empty() || without.ends_with([' ', '\t'])) {
            body = without.trim_end();
        }
    }
    start..start + body.len()
}

impl Default for TrailingPunctuation {
    fn default() -> Self {
        Self {
            punctuation: DEFAULT_PUNCTUATION.to_string(),
        }
    }
}

impl FromOptions for TrailingPunctuation {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        Self {
            punctuation: options.string_or("punctuation", DEFAULT_PUNCTUATION),
        }
    }
}

impl Rule for TrailingPunctuation {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mut found: Vec<_> = self.findings(doc).into_iter().collect();
        found.sort_by_key(|(idx, _)| *idx);
        found
            .into_iter()
            .filter_map(|(idx, range)| {
                let line = doc.line(idx + 1)?;
                let column = line[..range.start].chars().count() + 1;
                Some(Violation::new(
                    Self::META.id,
                    idx + 1,
                    column,
                    format!(
                        "{} [Punctuation: '{}']",
                        Self::META.description,
                        &line[range]
                    ),
                ))
            })
            .collect()
    }

    fn fix(&self, source: &str) -> Option<String> {
        let found = with_document(source, |doc| self.findings(doc))?;
        Some(rewrite_lines(source, |idx, line| match found.get(&idx) {
            Some(range) => LineEdit::Replace(format!(
                "{}{}",
                line[..range.start].trim_end(),
                &line[range.end..]
            )),
            None => LineEdit::Keep,
        }))
    }
}
