//! Built-in rules.

mod atx_spacing;
mod bare_urls;
mod blanks_around_headings;
mod duplicate_heading;
mod fenced_code_language;
mod first_line_heading;
mod hard_tabs;
mod heading_increment;
mod heading_style;
mod image_alt_text;
mod inline_html;
mod line_length;
mod link_definitions;
mod multiple_blanks;
mod ol_prefix;
mod reference_links;
mod references;
mod required_headings;
mod single_title;
mod table_column_count;
mod table_pipe_style;
mod tables;
mod trailing_newline;
mod trailing_punctuation;
mod trailing_spaces;
mod ul_style;

pub use atx_spacing::AtxSpacing;
pub use bare_urls::BareUrls;
pub use blanks_around_headings::BlanksAroundHeadings;
pub use duplicate_heading::DuplicateHeading;
pub use fenced_code_language::FencedCodeLanguage;
pub use first_line_heading::FirstLineHeading;
pub use hard_tabs::HardTabs;
pub use heading_increment::HeadingIncrement;
pub use heading_style::HeadingStyle;
pub use image_alt_text::ImageAltText;
pub use inline_html::InlineHtml;
pub use line_length::LineLength;
pub use link_definitions::LinkDefinitions;
pub use multiple_blanks::MultipleBlanks;
pub use ol_prefix::OlPrefix;
pub use reference_links::ReferenceLinks;
pub use required_headings::RequiredHeadings;
pub use single_title::SingleTitle;
pub use table_column_count::TableColumnCount;
pub use table_pipe_style::TablePipeStyle;
pub use trailing_newline::TrailingNewline;
pub use trailing_punctuation::TrailingPunctuation;
pub use trailing_spaces::TrailingSpaces;
pub use ul_style::UlStyle;
