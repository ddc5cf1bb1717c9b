//! The static rule catalog.

use crate::rules::*;
use crate::{Rule, RuleMeta, RuleOptions};

/// Builds a rule from its bound options.
pub trait FromOptions: Rule + Sized + 'static {
    fn from_options(options: &RuleOptions<'_>) -> Self;
}

/// A catalog entry: a rule's identity plus its constructor.
#[derive(Clone, Copy)]
pub struct RuleEntry {
    pub meta: &'static RuleMeta,
    build: fn(&RuleOptions<'_>) -> Box<dyn Rule>,
}

impl RuleEntry {
    /// Instantiates the rule with `options`.
    pub fn build(&self, options: &RuleOptions<'_>) -> Box<dyn Rule> {
        (self.build)(options)
    }
}

impl std::fmt::Debug for RuleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEntry").field("id", &self.meta.id).finish()
    }
}

fn build<R: FromOptions>(options: &RuleOptions<'_>) -> Box<dyn Rule> {
    Box::new(R::from_options(options))
}

macro_rules! entry {
    ($rule:ty) => {
        RuleEntry {
            meta: &<$rule>::META,
            build: build::<$rule>,
        }
    };
}

static CATALOG: [RuleEntry; 24] = [
    entry!(HeadingIncrement),
    entry!(HeadingStyle),
    entry!(UlStyle),
    entry!(TrailingSpaces),
    entry!(HardTabs),
    entry!(MultipleBlanks),
    entry!(LineLength),
    entry!(AtxSpacing),
    entry!(BlanksAroundHeadings),
    entry!(DuplicateHeading),
    entry!(SingleTitle),
    entry!(TrailingPunctuation),
    entry!(OlPrefix),
    entry!(InlineHtml),
    entry!(BareUrls),
    entry!(FencedCodeLanguage),
    entry!(FirstLineHeading),
    entry!(RequiredHeadings),
    entry!(ImageAltText),
    entry!(TrailingNewline),
    entry!(ReferenceLinks),
    entry!(LinkDefinitions),
    entry!(TablePipeStyle),
    entry!(TableColumnCount),
];

/// Every built-in rule, ordered by id.
pub fn catalog() -> &'static [RuleEntry] {
    &CATALOG
}

/// Looks up a rule by id or alias (case-insensitive).
pub fn find_rule(name: &str) -> Option<&'static RuleEntry> {
    CATALOG.iter().find(|entry| entry.meta.answers_to(name))
}
