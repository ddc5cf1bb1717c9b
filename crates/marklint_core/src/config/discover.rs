//! Locating the project configuration file.

use std::path::{Path, PathBuf};

use tracing::debug;

/// File names probed in each directory, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 6] = [
    ".marklint.json",
    ".marklint.jsonc",
    ".marklint.yaml",
    ".marklint.yml",
    "marklint.json",
    "marklint.yaml",
];

/// Walks from `start` up to the filesystem root and returns the first
/// configuration file found.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!("Found config file {}", candidate.display());
                return Some(candidate);
            }
        }
    }
    debug!("No config file found above {}", start.display());
    None
}
