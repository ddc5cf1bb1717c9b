//! Following `extends` chains.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ConfigFile, ResolvedConfig};
use crate::LinterError;

/// Loads `path` and every configuration it extends, folding them parent
/// first.
///
/// A missing `extends` target or a cycle in the chain is a configuration
/// error.
pub fn resolve_config(path: &Path) -> Result<ResolvedConfig, LinterError> {
    let mut chain = Vec::new();
    resolve_chain(path, &mut chain)
}

fn resolve_chain(path: &Path, chain: &mut Vec<PathBuf>) -> Result<ResolvedConfig, LinterError> {
    let canonical = path.canonicalize().map_err(|e| {
        LinterError::config(format!("Cannot open config {}: {}", path.display(), e))
    })?;

    if chain.contains(&canonical) {
        let cycle = chain
            .iter()
            .chain(std::iter::once(&canonical))
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        return Err(LinterError::config(format!("Circular extends: {}", cycle)));
    }

    debug!("Resolving config {}", canonical.display());
    let file = ConfigFile::from_path(&canonical)?;
    chain.push(canonical.clone());

    let mut resolved = match &file.extends {
        Some(target) => {
            let base_dir = canonical.parent().unwrap_or(Path::new("."));
            let target_path = base_dir.join(target);
            if !target_path.exists() {
                return Err(LinterError::config(format!(
                    "{} extends missing file {}",
                    canonical.display(),
                    target_path.display()
                )));
            }
            resolve_chain(&target_path, chain)?
        }
        None => ResolvedConfig::default(),
    };

    chain.pop();
    resolved.apply(file, Some(&canonical));
    Ok(resolved)
}
