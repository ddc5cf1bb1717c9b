//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use marklint_core::LintRecord;

pub fn output_json(records: &[LintRecord]) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(records).into_diagnostic()?
    );
    Ok(())
}
