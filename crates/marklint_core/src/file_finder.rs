//! Expanding command-line inputs into Markdown files.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ResolvedConfig;
use crate::error::LinterError;

/// Extensions picked up when walking directories.
pub const MARKDOWN_EXTENSIONS: [&str; 3] = ["md", "markdown", "mdx"];

const SKIPPED_DIRS: [&str; 2] = ["node_modules", "target"];

/// Files found and the inputs that could not be read, both sorted.
pub type DiscoveredFiles = (Vec<PathBuf>, Vec<(PathBuf, LinterError)>);

/// Expands `inputs` into the files to lint.
///
/// Files named explicitly are taken as they are; directories are walked for
/// Markdown files, skipping hidden and vendored directories. Anything the
/// configuration ignores is dropped. The files are sorted and deduplicated.
/// An input that does not exist is reported as a failure for that path and
/// does not stop the others.
pub fn discover_files(inputs: &[PathBuf], config: &ResolvedConfig) -> DiscoveredFiles {
    let mut files = Vec::new();
    let mut missing = Vec::new();

    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            walk(input, &mut files);
        } else {
            warn!("No such file or directory: {}", input.display());
            missing.push((
                input.clone(),
                LinterError::file(format!("No such file or directory: {}", input.display())),
            ));
        }
    }

    files.retain(|path| {
        let ignored = config.is_ignored(path);
        if ignored {
            debug!("Ignoring {}", path.display());
        }
        !ignored
    });
    files.sort();
    files.dedup();
    missing.sort_by(|a, b| a.0.cmp(&b.0));
    missing.dedup_by(|a, b| a.0 == b.0);

    info!("Found {} file(s) to lint", files.len());
    (files, missing)
}

fn walk(root: &Path, files: &mut Vec<PathBuf>) {
    let entries = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in entries {
        match entry {
            Ok(entry) if entry.file_type().is_file() && is_markdown(entry.path()) => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => debug!("Skipping unreadable entry: {}", e),
        }
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFile;
    use crate::test_utils::write_file;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_walks_directories_for_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.md", "");
        let b = write_file(dir.path(), "docs/b.markdown", "");
        write_file(dir.path(), "notes.txt", "");
        write_file(dir.path(), ".git/x.md", "");
        write_file(dir.path(), "node_modules/pkg/README.md", "");

        let files = discover_files(&[dir.path().to_path_buf()], &ResolvedConfig::default()).0;

        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_explicit_file_kept_regardless_of_extension() {
        let dir = tempfile::tempdir().unwrap();
        let txt = write_file(dir.path(), "notes.txt", "");

        let files = discover_files(std::slice::from_ref(&txt), &ResolvedConfig::default()).0;
        assert_eq!(files, vec![txt]);
    }

    #[test]
    fn test_ignores_applied() {
        let dir = tempfile::tempdir().unwrap();
        let kept = write_file(dir.path(), "docs/a.md", "");
        write_file(dir.path(), "vendor/b.md", "");
        let config = ResolvedConfig::from_file(
            ConfigFile::from_json(r#"{"ignores": ["vendor/**"]}"#).unwrap(),
        );

        let (files, missing) = discover_files(&[dir.path().to_path_buf()], &config);
        assert!(missing.is_empty());
        assert_eq!(files, vec![kept]);
    }

    #[test]
    fn test_missing_input_reported_without_dropping_others() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(dir.path(), "good.md", "");
        let nope = dir.path().join("missing.md");

        let (files, missing) =
            discover_files(&[nope.clone(), good.clone()], &ResolvedConfig::default());

        assert_eq!(files, vec![good]);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].0, nope);
        assert!(matches!(missing[0].1, LinterError::File(_)));
    }

    #[test]
    fn test_duplicates_removed() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.md", "");

        let files = discover_files(&[a.clone(), a.clone()], &ResolvedConfig::default()).0;
        assert_eq!(files, vec![a]);
    }
}
