//! Single file linting logic.

use std::fs;
use std::path::{Path, PathBuf};

use marklint_cache::{CacheEntry, CacheManager};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::LinterError;
use crate::linter::{FixOutcome, Linter};
use crate::result::LintResult;

pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads a lintable file, rejecting non-files and oversized files.
pub fn read_source(path: &Path) -> Result<String, LinterError> {
    let metadata = fs::metadata(path).map_err(|e| {
        LinterError::file(format!(
            "Failed to read metadata for {}: {}",
            path.display(),
            e
        ))
    })?;

    if !metadata.is_file() {
        return Err(LinterError::file(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(LinterError::file(format!(
            "File size exceeds limit of {} bytes: {}",
            MAX_FILE_SIZE,
            path.display()
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))
}

/// Lints one file, serving and refreshing `cache`.
///
/// Entries are keyed by absolute path and are valid only for the same
/// content hash and configuration fingerprint.
pub fn lint_file(
    path: &Path,
    linter: &Linter,
    config_hash: &str,
    cache: &Mutex<CacheManager>,
) -> Result<LintResult, LinterError> {
    debug!("Linting {}", path.display());

    let content = read_source(path)?;
    let key = cache_key(path);
    let content_hash = CacheManager::hash_content(&content);

    if let Some(violations) = cache.lock().lookup(&key, &content_hash, config_hash) {
        debug!("Using cached result for {}", path.display());
        return Ok(LintResult::cached(path.to_path_buf(), violations.to_vec()));
    }

    let violations = linter.lint(&content)?;

    cache.lock().set(
        &key,
        CacheEntry::new(content_hash, config_hash.to_string(), violations.clone()),
    );

    Ok(LintResult::new(path.to_path_buf(), violations))
}

/// Applies fixes to one file in place. The file is only written when some
/// rule changed it.
pub fn fix_file(path: &Path, linter: &Linter) -> Result<FixOutcome, LinterError> {
    let content = read_source(path)?;
    let outcome = linter.fix(&content);
    if outcome.changed() {
        fs::write(path, &outcome.output)
            .map_err(|e| LinterError::file(format!("Failed to write {}: {}", path.display(), e)))?;
        debug!(
            "Fixed {} ({})",
            path.display(),
            outcome.applied.join(", ")
        );
    }
    Ok(outcome)
}

fn cache_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
