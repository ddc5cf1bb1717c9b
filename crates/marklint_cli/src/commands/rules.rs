//! Rules command implementation

use marklint_rules::{RuleEntry, catalog};
use miette::Result;

pub fn run_rules() -> Result<()> {
    for entry in catalog() {
        println!("{}", describe(entry));
    }
    Ok(())
}

fn describe(entry: &RuleEntry) -> String {
    let meta = entry.meta;
    let fixable = if meta.fixable { " (fixable)" } else { "" };
    format!(
        "{:<6} {:<34} {}{}",
        meta.id,
        meta.aliases.join(", "),
        meta.description,
        fixable
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use marklint_rules::find_rule;

    #[test]
    fn test_describe_marks_fixable() {
        let line = describe(find_rule("MD047").unwrap());
        assert!(line.starts_with("MD047"));
        assert!(line.contains("single-trailing-newline"));
        assert!(line.ends_with("(fixable)"));
    }

    #[test]
    fn test_describe_unfixable() {
        let line = describe(find_rule("MD041").unwrap());
        assert!(!line.contains("(fixable)"));
    }
}
