//! Cache entry types.

use marklint_rules::Violation;
use serde::{Deserialize, Serialize};

/// A cache entry for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// SHA-256 hex digest of the file content.
    pub hash: String,

    /// Fingerprint of the effective configuration used.
    #[serde(default)]
    pub config_hash: String,

    /// Cached violations, already sorted.
    pub violations: Vec<Violation>,
}

impl CacheEntry {
    /// Creates a new cache entry.
    pub fn new(hash: String, config_hash: String, violations: Vec<Violation>) -> Self {
        Self {
            hash,
            config_hash,
            violations,
        }
    }

    /// Checks if this cache entry is valid for the given hashes.
    pub fn is_valid(&self, hash: &str, config_hash: &str) -> bool {
        self.hash == hash && self.config_hash == config_hash
    }
}
