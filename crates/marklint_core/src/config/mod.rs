//! Linter configuration.
//!
//! A project configuration is discovered by walking up from the target
//! directory, its `extends` chain is folded once, and the result is shared
//! read-only while files are linted. Per-file options come from
//! [`ResolvedConfig::effective_options`].

mod discover;
mod file;
mod glob;
mod merge;
mod resolve;

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::LinterError;

pub use discover::{CONFIG_FILE_NAMES, discover_config};
pub use file::{ConfigFile, ConfigFormat, OverrideEntry};
pub use glob::PathPattern;
pub use merge::{deep_merge, merge_into};
pub use resolve::resolve_config;

/// The final per-file rule option mapping.
pub type EffectiveConfig = Map<String, Value>;

/// A compiled `overrides` entry.
#[derive(Debug)]
pub struct Override {
    patterns: Vec<PathPattern>,
    config: Map<String, Value>,
}

impl Override {
    pub fn patterns(&self) -> &[PathPattern] {
        &self.patterns
    }

    pub fn config(&self) -> &Map<String, Value> {
        &self.config
    }

    fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(path))
    }
}

/// A configuration with its `extends` chain folded in.
#[derive(Debug, Default)]
pub struct ResolvedConfig {
    options: Map<String, Value>,
    ignores: Vec<PathPattern>,
    overrides: Vec<Override>,
    sources: Vec<PathBuf>,
    base_dir: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Resolves an explicit configuration file, or discovers one above
    /// `start_dir`. No configuration found means defaults.
    pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<Self, LinterError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => discover_config(start_dir),
        };
        match path {
            Some(path) => {
                let resolved = resolve_config(&path)?;
                info!(
                    "Loaded config {} ({} file(s) in chain)",
                    path.display(),
                    resolved.sources.len()
                );
                Ok(resolved)
            }
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Builds a resolved configuration from a single in-memory file,
    /// ignoring its `extends`.
    pub fn from_file(file: ConfigFile) -> Self {
        let mut resolved = Self::default();
        resolved.apply(file, None);
        resolved
    }

    /// Folds `file` on top of what is already resolved.
    pub(crate) fn apply(&mut self, file: ConfigFile, source: Option<&Path>) {
        merge_into(&mut self.options, &file.config);

        for pattern in &file.ignores {
            if let Some(compiled) = compile(pattern, "ignores") {
                self.ignores.push(compiled);
            }
        }

        for entry in file.overrides {
            let patterns: Vec<PathPattern> = entry
                .files
                .iter()
                .filter_map(|p| compile(p, "overrides"))
                .collect();
            if patterns.is_empty() {
                warn!("Skipping override with no usable file patterns");
                continue;
            }
            self.overrides.push(Override {
                patterns,
                config: entry.config,
            });
        }

        if let Some(source) = source {
            self.sources.push(source.to_path_buf());
            self.base_dir = source.parent().map(Path::to_path_buf);
        }
    }

    /// Base options before overrides.
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn ignores(&self) -> &[PathPattern] {
        &self.ignores
    }

    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }

    /// Files of the `extends` chain, root ancestor first.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Directory of the configuration file that started resolution.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Computes the options for one file: base options with every matching
    /// override folded in, in declaration order.
    pub fn effective_options(&self, path: &Path) -> EffectiveConfig {
        let candidate = self.relative(path);
        let mut effective = self.options.clone();
        for entry in self.overrides.iter().filter(|o| o.matches(&candidate)) {
            merge_into(&mut effective, &entry.config);
        }
        effective
    }

    /// Returns true when `path` matches any ignore pattern.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let candidate = self.relative(path);
        self.ignores.iter().any(|p| p.is_match(&candidate))
    }

    /// The path patterns are matched against: relative to the config
    /// directory when the file lies under it, absolute otherwise. The result
    /// does not depend on the working directory.
    fn relative(&self, path: &Path) -> String {
        let Some(base) = self.base_dir.as_deref() else {
            return path.to_string_lossy().into_owned();
        };
        let absolute = path
            .canonicalize()
            .or_else(|_| std::path::absolute(path))
            .unwrap_or_else(|_| path.to_path_buf());
        absolute
            .strip_prefix(base)
            .unwrap_or(&absolute)
            .to_string_lossy()
            .into_owned()
    }
}

/// BLAKE3 hex digest of an effective configuration, used to invalidate
/// cache entries produced under different options.
pub fn fingerprint(options: &EffectiveConfig) -> String {
    let json = serde_json::to_string(options).unwrap_or_default();
    blake3::hash(json.as_bytes()).to_hex().to_string()
}

fn compile(pattern: &str, field: &str) -> Option<PathPattern> {
    match PathPattern::new(pattern) {
        Ok(compiled) => Some(compiled),
        Err(e) => {
            warn!("Skipping invalid pattern {:?} in {}: {}", pattern, field, e);
            None
        }
    }
}
