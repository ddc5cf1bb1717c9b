//! MD043: required heading structure.
//!
//! The expected structure is a list of tokens: a literal heading (either
//! bare text or prefixed with its `#` marks), `*` for zero or more
//! headings, `+` for one or more and `?` for exactly one. Matching is a
//! backtracking search memoized on `(token, heading)` positions.

use crate::{Document, FromOptions, Heading, Rule, RuleMeta, RuleOptions, Violation};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    ZeroOrMore,
    OneOrMore,
    One,
    Literal(String),
}

impl Token {
    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "*" => Token::ZeroOrMore,
            "+" => Token::OneOrMore,
            "?" => Token::One,
            text => Token::Literal(text.to_string()),
        }
    }

    fn display(&self) -> &str {
        match self {
            Token::ZeroOrMore => "*",
            Token::OneOrMore => "+",
            Token::One => "?",
            Token::Literal(text) => text,
        }
    }
}

/// Where the deepest token failed.
#[derive(Debug, Clone, Copy)]
struct Failure {
    token: usize,
    /// Earliest heading the token was compared against and rejected.
    heading: Option<usize>,
    /// The token was still pending when the headings ran out.
    ran_out: bool,
}

/// Memoized matcher over one document's headings.
struct Matcher<'t> {
    tokens: &'t [Token],
    /// `(text, text prefixed with its # marks)` per heading.
    headings: Vec<(String, String)>,
    match_case: bool,
    memo: Vec<Option<bool>>,
    deepest: Option<Failure>,
}

impl<'t> Matcher<'t> {
    fn new(tokens: &'t [Token], headings: &[Heading], match_case: bool) -> Self {
        let headings = headings
            .iter()
            .map(|h| {
                (
                    h.text.clone(),
                    format!("{} {}", "#".repeat(h.depth as usize), h.text),
                )
            })
            .collect::<Vec<_>>();
        let memo = vec![None; (tokens.len() + 1) * (headings.len() + 1)];
        Self {
            tokens,
            headings,
            match_case,
            memo,
            deepest: None,
        }
    }

    fn literal_matches(&self, literal: &str, heading: usize) -> bool {
        let (text, marked) = &self.headings[heading];
        let actual = if literal.starts_with('#') { marked } else { text };
        if self.match_case {
            actual == literal
        } else {
            actual.to_lowercase() == literal.to_lowercase()
        }
    }

    fn matches(&mut self, token: usize, heading: usize) -> bool {
        let slot = token * (self.headings.len() + 1) + heading;
        if let Some(cached) = self.memo[slot] {
            return cached;
        }

        let tokens = self.tokens;
        let remaining = self.headings.len();
        let result = match tokens.get(token) {
            None => heading == remaining || self.fail(token, heading),
            Some(Token::ZeroOrMore) => (heading..=remaining).any(|h| self.matches(token + 1, h)),
            Some(Token::OneOrMore) if heading == remaining => self.fail(token, heading),
            Some(Token::OneOrMore) => {
                (heading + 1..=remaining).any(|h| self.matches(token + 1, h))
            }
            Some(Token::One) if heading == remaining => self.fail(token, heading),
            Some(Token::One) => self.matches(token + 1, heading + 1),
            Some(Token::Literal(literal)) => {
                if heading < remaining && self.literal_matches(literal, heading) {
                    self.matches(token + 1, heading + 1)
                } else {
                    self.fail(token, heading)
                }
            }
        };

        self.memo[slot] = Some(result);
        result
    }

    /// Records a failed token and returns false.
    fn fail(&mut self, token: usize, heading: usize) -> bool {
        let ran_out = heading >= self.headings.len();
        let compared = (!ran_out).then_some(heading);
        match &mut self.deepest {
            Some(failure) if failure.token > token => {}
            Some(failure) if failure.token == token => {
                failure.ran_out |= ran_out;
                failure.heading = match (failure.heading, compared) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
            }
            _ => {
                self.deepest = Some(Failure {
                    token,
                    heading: compared,
                    ran_out,
                })
            }
        }
        false
    }
}

#[derive(Default)]
pub struct RequiredHeadings {
    tokens: Vec<Token>,
    match_case: bool,
}

impl RequiredHeadings {
    pub const META: RuleMeta = RuleMeta {
        id: "MD043",
        aliases: &["required-headings"],
        description: "Required heading structure",
        fixable: false,
    };
}

impl FromOptions for RequiredHeadings {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        Self {
            tokens: options
                .string_list_or("headings", &[])
                .iter()
                .map(|raw| Token::parse(raw))
                .collect(),
            match_case: options.bool_or("match_case", false),
        }
    }
}

impl Rule for RequiredHeadings {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        if self.tokens.is_empty() {
            return Vec::new();
        }
        let headings = doc.headings();
        let mut matcher = Matcher::new(&self.tokens, headings, self.match_case);
        if matcher.matches(0, 0) {
            return Vec::new();
        }

        let failure = matcher.deepest.unwrap_or(Failure {
            token: 0,
            heading: None,
            ran_out: true,
        });
        let expected = self
            .tokens
            .get(failure.token)
            .map_or("no further headings", Token::display);
        let violation = match failure.heading {
            Some(heading) if !failure.ran_out || failure.token == self.tokens.len() => {
                Violation::new(
                    Self::META.id,
                    headings[heading].line,
                    1,
                    format!(
                        "{} [Expected: {}; Actual: {}]",
                        Self::META.description,
                        expected,
                        matcher.headings[heading].1
                    ),
                )
            }
            _ => Violation::new(
                Self::META.id,
                doc.line_count(),
                1,
                format!("{} [Missing heading: {}]", Self::META.description, expected),
            ),
        };
        vec![violation]
    }
}
