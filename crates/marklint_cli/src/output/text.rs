//! Text output formatter

use marklint_core::LintRecord;

use super::Summary;

pub fn format_record(record: &LintRecord) -> String {
    format!(
        "{}:{}:{}: {} [{}] {}",
        record.file, record.line, record.column, record.severity, record.rule, record.message
    )
}

pub fn output_text(records: &[LintRecord], summary: Summary) {
    for record in records {
        println!("{}", format_record(record));
    }

    println!(
        "Checked {} file(s) ({} from cache), found {} issue(s)",
        summary.files,
        summary.cached,
        records.len()
    );
}
