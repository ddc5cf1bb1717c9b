//! Cache manager for file-level caching.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use marklint_rules::Violation;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::{CacheEntry, CacheError};

/// Name of the cache file inside the cache directory.
pub const CACHE_FILE_NAME: &str = ".marklint-cache.json";

/// Manages the lint cache for all files.
pub struct CacheManager {
    /// Directory where the cache file is stored.
    cache_dir: PathBuf,
    /// In-memory cache entries keyed by file path.
    entries: HashMap<String, CacheEntry>,
    /// Whether cache is enabled.
    enabled: bool,
}

impl CacheManager {
    /// Creates a new cache manager storing its file in `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            entries: HashMap::new(),
            enabled: true,
        }
    }

    /// Disables caching.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Enables caching.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Returns whether caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Path of the persisted cache file.
    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir.join(CACHE_FILE_NAME)
    }

    /// Computes the SHA-256 hex digest of content.
    pub fn hash_content(content: &str) -> String {
        let digest = Sha256::digest(content.as_bytes());
        format!("{digest:x}")
    }

    fn key(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    /// Gets a cached entry for a file.
    pub fn get(&self, path: &Path) -> Option<&CacheEntry> {
        if !self.enabled {
            return None;
        }
        self.entries.get(&Self::key(path))
    }

    /// Checks if a file's cache is valid for its current content and configuration.
    pub fn is_valid(&self, path: &Path, content_hash: &str, config_hash: &str) -> bool {
        self.get(path)
            .is_some_and(|entry| entry.is_valid(content_hash, config_hash))
    }

    /// Returns the cached violations if the entry is still valid.
    pub fn lookup(&self, path: &Path, content_hash: &str, config_hash: &str) -> Option<&[Violation]> {
        self.get(path)
            .filter(|entry| entry.is_valid(content_hash, config_hash))
            .map(|entry| entry.violations.as_slice())
    }

    /// Stores a cache entry for a file.
    pub fn set(&mut self, path: &Path, entry: CacheEntry) {
        if self.enabled {
            self.entries.insert(Self::key(path), entry);
        }
    }

    /// Removes a cache entry.
    pub fn remove(&mut self, path: &Path) {
        self.entries.remove(&Self::key(path));
    }

    /// Clears all cache entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Loads cache from disk.
    ///
    /// A missing or malformed cache file leaves the cache empty; only an
    /// unreadable file is reported as an error.
    pub fn load(&mut self) -> Result<(), CacheError> {
        if !self.enabled {
            return Ok(());
        }

        let cache_file = self.cache_file();
        let content = match fs::read_to_string(&cache_file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No cache file found at {}", cache_file.display());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<HashMap<String, CacheEntry>>(&content) {
            Ok(entries) => {
                info!("Loaded {} cache entries", entries.len());
                self.entries = entries;
            }
            Err(e) => {
                warn!(
                    "Ignoring corrupted cache at {}: {}",
                    cache_file.display(),
                    CacheError::corrupted(e.to_string())
                );
                self.entries.clear();
            }
        }

        Ok(())
    }

    /// Saves cache to disk.
    pub fn save(&self) -> Result<(), CacheError> {
        if !self.enabled {
            return Ok(());
        }

        fs::create_dir_all(&self.cache_dir)?;

        let cache_file = self.cache_file();
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| CacheError::serialization(e.to_string()))?;

        fs::write(&cache_file, json)?;

        info!(
            "Saved {} cache entries to {}",
            self.entries.len(),
            cache_file.display()
        );

        Ok(())
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn entry(hash: &str) -> CacheEntry {
        CacheEntry::new(
            hash.to_string(),
            "cfg".to_string(),
            vec![Violation::new("MD041", 1, 1, "First line")],
        )
    }

    #[test]
    fn test_cache_manager_new() {
        let manager = CacheManager::new("/tmp/test-cache");
        assert!(manager.is_enabled());
        assert!(manager.is_empty());
        assert_eq!(
            manager.cache_file(),
            PathBuf::from("/tmp/test-cache/.marklint-cache.json")
        );
    }

    #[test]
    fn test_hash_content_is_sha256() {
        assert_eq!(
            CacheManager::hash_content("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_set_get_and_lookup() {
        let mut manager = CacheManager::new("/tmp/test-cache");
        let path = PathBuf::from("/test/file.md");
        manager.set(&path, entry("hash123"));

        assert_eq!(manager.len(), 1);
        assert!(manager.is_valid(&path, "hash123", "cfg"));
        assert_eq!(manager.lookup(&path, "hash123", "cfg").map(<[_]>::len), Some(1));
        assert!(manager.lookup(&path, "other", "cfg").is_none());
        assert!(manager.lookup(&path, "hash123", "other").is_none());
    }

    #[test]
    fn test_disabled_cache_ignores_entries() {
        let mut manager = CacheManager::new("/tmp/test-cache");
        manager.disable();
        let path = PathBuf::from("/test/file.md");
        manager.set(&path, entry("hash123"));

        assert!(manager.is_empty());
        assert!(manager.get(&path).is_none());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut manager = CacheManager::new("/tmp/test-cache");
        manager.set(Path::new("a.md"), entry("1"));
        manager.set(Path::new("b.md"), entry("2"));
        manager.remove(Path::new("a.md"));
        assert_eq!(manager.len(), 1);
        manager.clear();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = PathBuf::from("/project/readme.md");

        let mut manager = CacheManager::new(dir.path());
        manager.set(&path, entry("hash123"));
        manager.save().unwrap();
        assert!(dir.path().join(CACHE_FILE_NAME).exists());

        let mut loaded = CacheManager::new(dir.path());
        loaded.load().unwrap();
        assert_eq!(loaded.get(&path), Some(&entry("hash123")));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let mut manager = CacheManager::new(dir.path());
        manager.load().unwrap();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CACHE_FILE_NAME), "{ not json").unwrap();

        let mut manager = CacheManager::new(dir.path());
        manager.set(Path::new("stale.md"), entry("x"));
        manager.load().unwrap();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_disabled_save_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut manager = CacheManager::new(dir.path());
        manager.disable();
        manager.save().unwrap();
        assert!(!dir.path().join(CACHE_FILE_NAME).exists());
    }
}
