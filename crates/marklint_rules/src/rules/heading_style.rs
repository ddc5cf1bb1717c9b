//! MD003: consistent heading style.

use std::fmt;

use crate::{Document, FromOptions, Heading, Rule, RuleMeta, RuleOptions, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Atx,
    AtxClosed,
    Setext,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::Atx => "atx",
            Style::AtxClosed => "atx_closed",
            Style::Setext => "setext",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    Consistent,
    Fixed(Style),
    /// Setext for levels 1 and 2, ATX below.
    SetextWithAtx,
    SetextWithAtxClosed,
}

pub struct HeadingStyle {
    expected: Expected,
}

impl HeadingStyle {
    pub const META: RuleMeta = RuleMeta {
        id: "MD003",
        aliases: &["heading-style"],
        description: "Heading style",
        fixable: false,
    };

    fn style_of(doc: &Document<'_>, heading: &Heading) -> Style {
        if heading.setext {
            return Style::Setext;
        }
        let line = doc.line(heading.line).unwrap_or("").trim_end();
        let body = line.trim_start().trim_start_matches('#');
        if !body.trim().is_empty() && body.ends_with('#') {
            Style::AtxClosed
        } else {
            Style::Atx
        }
    }
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self {
            expected: Expected::Consistent,
        }
    }
}

impl FromOptions for HeadingStyle {
    fn from_options(options: &RuleOptions<'_>) -> Self {
        let expected = match options.string_or("style", "consistent").as_str() {
            "atx" => Expected::Fixed(Style::Atx),
            "atx_closed" => Expected::Fixed(Style::AtxClosed),
            "setext" => Expected::Fixed(Style::Setext),
            "setext_with_atx" => Expected::SetextWithAtx,
            "setext_with_atx_closed" => Expected::SetextWithAtxClosed,
            _ => Expected::Consistent,
        };
        Self { expected }
    }
}

impl Rule for HeadingStyle {
    fn meta(&self) -> &'static RuleMeta {
        &Self::META
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut first: Option<Style> = None;

        for heading in doc.headings() {
            let actual = Self::style_of(doc, heading);
            let expected = match self.expected {
                Expected::Consistent => *first.get_or_insert(actual),
                Expected::Fixed(style) => style,
                Expected::SetextWithAtx | Expected::SetextWithAtxClosed if heading.depth <= 2 => {
                    Style::Setext
                }
                Expected::SetextWithAtx => Style::Atx,
                Expected::SetextWithAtxClosed => Style::AtxClosed,
            };
            // setext cannot express levels 3-6
            let expected = if expected == Style::Setext && heading.depth > 2 {
                actual
            } else {
                expected
            };
            if actual != expected {
                violations.push(Violation::new(
                    Self::META.id,
                    heading.line,
                    1,
                    format!(
                        "{} [Expected: {}; Actual: {}]",
                        Self::META.description,
                        expected,
                        actual
                    ),
                ));
            }
        }

        violations
    }
}
