//! Integration tests linting a small project on disk.
//!
//! These tests exercise discovery, `extends`, overrides, ignores, parallel
//! linting and the persistent cache together.

use std::fs;
use std::path::{Path, PathBuf};

use marklint_core::file_finder::discover_files;
use marklint_core::{CacheManager, LintRecord, ResolvedConfig, Severity, lint_files};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(root: &Path, name: &str, content: &str) -> PathBuf {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "config/base.yaml",
        "config:\n  default: false\n  MD041: true\n  MD013:\n    line_length: 20\n    code_blocks: false\n",
    );
    write(
        root,
        ".marklint.jsonc",
        r#"{
            // Project settings on top of the shared base.
            "extends": "config/base.yaml",
            "config": { "MD013": { "line_length": 30 } },
            "ignores": ["vendor/**"],
            "overrides": [
                { "files": ["docs/**"], "config": { "MD041": "warning" } }
            ]
        }"#,
    );
    write(root, "README.md", "# Project\n\nShort line.\n");
    write(
        root,
        "docs/guide.md",
        "Guide without a heading and with a line that is long\n",
    );
    write(root, "vendor/lib/README.md", "no heading\n");
    dir
}

fn lint(root: &Path) -> Vec<LintRecord> {
    let config = ResolvedConfig::load(None, root).unwrap();
    let (files, missing) = discover_files(&[root.to_path_buf()], &config);
    assert!(missing.is_empty());
    let mut manager = CacheManager::new(root);
    manager.load().unwrap();
    let cache = Mutex::new(manager);
    let (results, failures) = lint_files(&files, &config, &cache);
    assert!(failures.is_empty());
    results
        .iter()
        .flat_map(|r| {
            r.records().into_iter().map(|mut record| {
                record.file = Path::new(&record.file)
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/");
                record
            })
        })
        .collect()
}

#[test]
fn test_project_lint() {
    let dir = project();
    let root = dir.path().canonicalize().unwrap();

    let records = lint(&root);
    let summary: Vec<(&str, usize, &str, Severity)> = records
        .iter()
        .map(|r| (r.file.as_str(), r.line, r.rule.as_str(), r.severity))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("docs/guide.md", 1, "MD013", Severity::Error),
            ("docs/guide.md", 1, "MD041", Severity::Warning),
        ]
    );
    assert_eq!(records[0].column, 31);
}

#[test]
fn test_second_run_served_from_cache() {
    let dir = project();
    let root = dir.path().canonicalize().unwrap();

    let first = lint(&root);
    assert!(root.join(".marklint-cache.json").is_file());

    let config = ResolvedConfig::load(None, &root).unwrap();
    let (files, _) = discover_files(&[root.clone()], &config);
    let mut manager = CacheManager::new(&root);
    manager.load().unwrap();
    let cache = Mutex::new(manager);
    let (results, _) = lint_files(&files, &config, &cache);

    assert!(results.iter().all(|r| r.from_cache));
    assert_eq!(lint(&root), first);
}

#[test]
fn test_config_change_not_served_stale() {
    let dir = project();
    let root = dir.path().canonicalize().unwrap();
    lint(&root);

    write(
        &root,
        ".marklint.jsonc",
        r#"{ "extends": "config/base.yaml", "config": { "MD013": false } }"#,
    );
    let records = lint(&root);

    assert!(records.iter().all(|r| r.rule != "MD013"));
}

#[test]
fn test_circular_extends_aborts() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".marklint.json", r#"{ "extends": "other.json" }"#);
    write(dir.path(), "other.json", r#"{ "extends": ".marklint.json" }"#);

    let err = ResolvedConfig::load(None, dir.path()).unwrap_err();
    assert!(err.is_fatal());
}
