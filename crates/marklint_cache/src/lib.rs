//! # marklint_cache
//!
//! Caching system for marklint.
//!
//! Avoids re-linting files whose content has not changed.
//!
//! ## Cache Strategy
//!
//! 1. **File-level cache**: skip files whose SHA-256 content hash matches
//! 2. **Config-aware**: an entry also records a fingerprint of the
//!    effective configuration it was produced under and is only reused
//!    when that matches too
//!
//! ## Storage
//!
//! One JSON document per project directory (`.marklint-cache.json`),
//! mapping file path to its entry. A missing or malformed file is an
//! empty cache.

mod entry;
mod error;
mod manager;

pub use entry::CacheEntry;
pub use error::CacheError;
pub use manager::{CACHE_FILE_NAME, CacheManager};
