//! Output formatting module

mod json;
mod text;

use miette::Result;
use marklint_core::{LintRecord, Severity};

use crate::cli::OutputFormat;

/// Counts shown in the text summary line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Summary {
    pub files: usize,
    pub cached: usize,
}

/// Prints `records` in `format` and reports whether any has error severity.
pub fn output_records(records: &[LintRecord], format: OutputFormat, summary: Summary) -> Result<bool> {
    let has_errors = records.iter().any(|r| r.severity == Severity::Error);

    match format {
        OutputFormat::Json => json::output_json(records)?,
        OutputFormat::Text => text::output_text(records, summary),
    }

    Ok(has_errors)
}
