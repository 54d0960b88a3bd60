//! Cache manager for persisting upstream responses to disk
//!
//! Provides a `CacheManager` that stores serializable data to JSON files with
//! expiry timestamps. Expired entries are treated as absent on read, so
//! callers re-fetch instead of serving stale data.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Wrapper struct for cached data stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// The cached data
    data: T,
    /// When the data was cached
    cached_at: DateTime<Utc>,
    /// When the cache entry expires
    expires_at: DateTime<Utc>,
}

/// Manages reading and writing cached data to disk
///
/// The cache manager stores data as JSON files in an XDG-compliant cache
/// directory (`~/.cache/flagcdn/` on Linux). Each entry carries an expiry
/// timestamp; once past it, the entry behaves as if it were never written.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using the XDG-compliant cache directory
    ///
    /// Uses `~/.cache/flagcdn/` on Linux, or the equivalent XDG path elsewhere.
    /// Returns `None` if the cache directory cannot be determined (e.g., no
    /// home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "flagcdn")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheManager with a custom cache directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to a cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Stores a value under `key` with the given time-to-live in minutes
    ///
    /// The entry is serialized as one complete JSON document, so readers
    /// observe either the whole value or nothing. Any existing entry for the
    /// key is overwritten unconditionally.
    ///
    /// # Arguments
    /// * `key` - Unique identifier for the cache entry
    /// * `value` - The value to cache (must implement Serialize)
    /// * `ttl_minutes` - How long the entry stays readable
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err` if directory creation or file writing fails
    pub fn put<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_minutes: u64,
    ) -> std::io::Result<()> {
        self.ensure_dir()?;

        let now = Utc::now();
        let entry = CacheEntry {
            data: value,
            cached_at: now,
            expires_at: now + Duration::minutes(ttl_minutes as i64),
        };

        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(key), json)
    }

    /// Reads a value from the cache
    ///
    /// Returns `None` if the entry doesn't exist, cannot be parsed, or has
    /// expired. An expired entry is indistinguishable from a missing one.
    ///
    /// # Arguments
    /// * `key` - The cache key to read
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.cache_path(key);
        let content = fs::read_to_string(path).ok()?;
        let entry: CacheEntry<T> = serde_json::from_str(&content).ok()?;

        if Utc::now() > entry.expires_at {
            return None;
        }

        Some(entry.data)
    }
}
