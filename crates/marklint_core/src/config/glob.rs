//! Path globbing for ignore lists and overrides.
//!
//! Patterns are split on `/`. A `**` segment stands for zero or more whole
//! path segments; every other segment is a single-segment glob (`*`, `?`,
//! `[...]`, `{a,b}`). Patterns containing `**` may match starting at any
//! segment of the candidate, so `vendor/**` also matches
//! `/home/me/project/vendor/lib.md`. Patterns without `**` match either the
//! whole path or just its file name.

use std::fmt;
use std::path::Path;

use globset::{Glob, GlobMatcher};

enum Segment {
    Globstar,
    Glob(GlobMatcher),
}

/// A compiled path pattern.
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
    has_globstar: bool,
}

impl PathPattern {
    /// Compiles `pattern`, failing on an invalid segment glob.
    pub fn new(pattern: &str) -> Result<Self, globset::Error> {
        let normalized = normalize(pattern);
        let mut segments = Vec::new();
        for part in split_segments(&normalized) {
            if part == "**" {
                // Consecutive globstars are equivalent to one.
                if !matches!(segments.last(), Some(Segment::Globstar)) {
                    segments.push(Segment::Globstar);
                }
            } else {
                segments.push(Segment::Glob(Glob::new(part)?.compile_matcher()));
            }
        }
        let has_globstar = segments.iter().any(|s| matches!(s, Segment::Globstar));
        Ok(Self {
            source: pattern.to_string(),
            segments,
            has_globstar,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Tests a filesystem path.
    pub fn matches_path(&self, path: &Path) -> bool {
        self.is_match(&path.to_string_lossy())
    }

    /// Tests a `/`- or `\`-separated path string.
    pub fn is_match(&self, path: &str) -> bool {
        let normalized = normalize(path);
        let parts: Vec<&str> = split_segments(&normalized).collect();

        if !self.has_globstar {
            return self.matches_exactly(&parts)
                || (self.segments.len() == 1
                    && parts.last().is_some_and(|last| self.segment_matches(0, last)));
        }

        let width = parts.len() + 1;
        let mut memo = vec![None; (self.segments.len() + 1) * width];
        (0..=parts.len()).any(|start| self.match_from(&parts, 0, start, &mut memo))
    }

    fn matches_exactly(&self, parts: &[&str]) -> bool {
        parts.len() == self.segments.len()
            && parts
                .iter()
                .enumerate()
                .all(|(idx, part)| self.segment_matches(idx, part))
    }

    fn segment_matches(&self, idx: usize, part: &str) -> bool {
        match &self.segments[idx] {
            Segment::Globstar => true,
            Segment::Glob(matcher) => matcher.is_match(part),
        }
    }

    /// Matches pattern segments from `pi` against path segments from `si`.
    ///
    /// `memo` is indexed by `(pi, si)` and shared across start offsets since
    /// the outcome does not depend on where matching began.
    fn match_from(&self, parts: &[&str], pi: usize, si: usize, memo: &mut [Option<bool>]) -> bool {
        let slot = pi * (parts.len() + 1) + si;
        if let Some(known) = memo[slot] {
            return known;
        }

        let matched = match self.segments.get(pi) {
            None => si == parts.len(),
            Some(Segment::Globstar) => {
                (si..=parts.len()).any(|next| self.match_from(parts, pi + 1, next, memo))
            }
            Some(Segment::Glob(matcher)) => {
                si < parts.len()
                    && matcher.is_match(parts[si])
                    && self.match_from(parts, pi + 1, si + 1, memo)
            }
        };

        memo[slot] = Some(matched);
        matched
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathPattern").field(&self.source).finish()
    }
}

fn normalize(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut rest = path.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest.to_string()
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}
