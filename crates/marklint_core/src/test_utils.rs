use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use marklint_rules::{Document, Rule, RuleMeta, Violation};

static COUNTING: RuleMeta = RuleMeta {
    id: "counting",
    aliases: &[],
    description: "Reports the last line and counts invocations",
    fixable: false,
};

/// Rule that records how often it is checked.
pub struct CountingRule {
    calls: Arc<AtomicUsize>,
}

impl CountingRule {
    pub fn new(calls: Arc<AtomicUsize>) -> Self {
        Self { calls }
    }
}

impl Rule for CountingRule {
    fn meta(&self) -> &'static RuleMeta {
        &COUNTING
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Violation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        vec![Violation::new(COUNTING.id, doc.line_count(), 1, "checked")]
    }
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
