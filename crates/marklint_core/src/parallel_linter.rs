//! Parallel file linting logic.

use std::path::PathBuf;

use marklint_cache::CacheManager;
use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::{ResolvedConfig, fingerprint};
use crate::error::LinterError;
use crate::file_linter::{fix_file, lint_file};
use crate::linter::{FixOutcome, Linter};
use crate::result::LintResult;

/// Successful results and per-file failures, both in input order.
pub type LintFilesResult = (Vec<LintResult>, Vec<(PathBuf, LinterError)>);

/// Lints `paths` in parallel.
///
/// Each file gets its own linter built from its effective configuration.
/// A failing file is reported and does not stop the others. The cache is
/// saved once after every file has been processed.
pub fn lint_files(
    paths: &[PathBuf],
    config: &ResolvedConfig,
    cache: &Mutex<CacheManager>,
) -> LintFilesResult {
    let results: Vec<Result<LintResult, (PathBuf, LinterError)>> = paths
        .par_iter()
        .map(|path| {
            let effective = config.effective_options(path);
            let linter = Linter::from_config(&effective);
            lint_file(path, &linter, &fingerprint(&effective), cache)
                .map_err(|e| (path.clone(), e))
        })
        .collect();

    let mut successes = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(lint_result) => successes.push(lint_result),
            Err((path, error)) => {
                warn!("Failed to lint {}: {}", path.display(), error);
                failures.push((path, error));
            }
        }
    }

    let cached = successes.iter().filter(|r| r.from_cache).count();
    info!(
        "Linted {} file(s), {} from cache, {} failed",
        successes.len(),
        cached,
        failures.len()
    );

    if let Err(e) = cache.lock().save() {
        warn!("Failed to save cache: {}", e);
    }

    (successes, failures)
}

/// Applies fixes to `paths` in parallel, in place.
pub fn fix_files(
    paths: &[PathBuf],
    config: &ResolvedConfig,
) -> Vec<(PathBuf, Result<FixOutcome, LinterError>)> {
    paths
        .par_iter()
        .map(|path| {
            let linter = Linter::from_config(&config.effective_options(path));
            (path.clone(), fix_file(path, &linter))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFile;
    use crate::test_utils::write_file;
    use pretty_assertions::assert_eq;

    fn config(json: &str) -> ResolvedConfig {
        ResolvedConfig::from_file(ConfigFile::from_json(json).unwrap())
    }

    #[test]
    fn test_lint_files_parallel_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Mutex::new(CacheManager::new(dir.path()));

        let (successes, failures) = lint_files(&[], &ResolvedConfig::default(), &cache);
        assert!(successes.is_empty());
        assert!(failures.is_empty());
    }

    #[test]
    fn test_failures_do_not_stop_others() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(dir.path(), "good.md", "# Title\n");
        let missing = dir.path().join("missing.md");
        let cache = Mutex::new(CacheManager::new(dir.path()));

        let (successes, failures) =
            lint_files(&[missing.clone(), good.clone()], &ResolvedConfig::default(), &cache);

        assert_eq!(successes.len(), 1);
        assert_eq!(successes[0].path, good);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, missing);
    }

    #[test]
    fn test_results_keep_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..16)
            .map(|i| write_file(dir.path(), &format!("f{i}.md"), "# T\n"))
            .collect();
        let cache = Mutex::new(CacheManager::new(dir.path()));

        let (successes, _) = lint_files(&paths, &ResolvedConfig::default(), &cache);
        let order: Vec<PathBuf> = successes.into_iter().map(|r| r.path).collect();
        assert_eq!(order, paths);
    }

    #[test]
    fn test_per_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write_file(dir.path(), "docs/a.md", "text\n");
        let other = write_file(dir.path(), "b.md", "text\n");
        let config = config(
            r#"{
                "config": {"default": false, "MD041": true},
                "overrides": [{"files": ["docs/**"], "config": {"MD041": false}}]
            }"#,
        );
        let cache = Mutex::new(CacheManager::new(dir.path()));

        let (successes, _) = lint_files(&[doc, other], &config, &cache);

        assert!(successes[0].violations.is_empty());
        assert_eq!(successes[1].violations.len(), 1);
    }

    #[test]
    fn test_cache_saved_once_and_reused() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.md", "text\n");
        let config = ResolvedConfig::default();

        let cache = Mutex::new(CacheManager::new(dir.path()));
        let (first, _) = lint_files(std::slice::from_ref(&path), &config, &cache);
        assert!(!first[0].from_cache);

        let mut reloaded = CacheManager::new(dir.path());
        reloaded.load().unwrap();
        assert_eq!(reloaded.len(), 1);

        let cache = Mutex::new(reloaded);
        let (second, _) = lint_files(std::slice::from_ref(&path), &config, &cache);
        assert!(second[0].from_cache);
        assert_eq!(first[0].violations, second[0].violations);
    }

    #[test]
    fn test_fix_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.md", "#Title");
        let config = config(r#"{"config": {"MD018": false}}"#);

        let results = fix_files(std::slice::from_ref(&path), &config);

        let outcome = results[0].1.as_ref().unwrap();
        assert_eq!(outcome.applied, vec!["MD047".to_string()]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "#Title\n");
    }
}
