//! TTL Cache Module
//!
//! HashMap-backed store where every entry carries an expiry instant. Expiry is
//! checked lazily on read; there is no background sweep.

use std::collections::HashMap;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats};

// == TTL Cache ==
/// Key-value store with per-entry expiry.
///
/// Not synchronized on its own; share it as `Arc<RwLock<TtlCache<V>>>`.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lookup statistics
    stats: CacheStats,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Stores `value` under `key` for `ttl_ms` milliseconds from now.
    ///
    /// Any existing entry for the key is replaced unconditionally.
    pub fn put(&mut self, key: impl Into<String>, value: V, ttl_ms: u64) {
        self.put_at(key, value, ttl_ms, current_timestamp_ms());
    }

    /// Same as [`TtlCache::put`] with an explicit current instant.
    pub fn put_at(&mut self, key: impl Into<String>, value: V, ttl_ms: u64, now_ms: u64) {
        self.entries
            .insert(key.into(), CacheEntry::new(value, ttl_ms, now_ms));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a clone of the value for `key` if its entry has not expired.
    ///
    /// An expired entry is purged and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, current_timestamp_ms())
    }

    /// Same as [`TtlCache::get`] with an explicit current instant.
    pub fn get_at(&mut self, key: &str, now_ms: u64) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now_ms) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of physically stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_store_new() {
        let cache: TtlCache<String> = TtlCache::new();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_and_get() {
        let mut cache = TtlCache::new();

        cache.put("station_8503000", "Zürich HB".to_string(), 30_000);

        assert_eq!(cache.get("station_8503000").as_deref(), Some("Zürich HB"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_nonexistent() {
        let mut cache: TtlCache<String> = TtlCache::new();
        assert!(cache.get("station_1").is_none());
    }

    #[test]
    fn test_overwrite_replaces_value_and_expiry() {
        let mut cache = TtlCache::new();

        cache.put_at("k", 1, 1_000, 0);
        cache.put_at("k", 2, 1_000, 5_000);

        // The first write would have expired at 1_000; the second lives until 6_000.
        assert_eq!(cache.get_at("k", 5_500), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expiry_boundary() {
        let mut cache = TtlCache::new();
        cache.put_at("k", "v", 30_000, 0);

        assert_eq!(cache.get_at("k", 29_999), Some("v"));
        assert_eq!(cache.get_at("k", 30_000), None);
    }

    #[test]
    fn test_expired_entry_is_purged_on_read() {
        let mut cache = TtlCache::new();
        cache.put_at("k", "v", 10, 0);
        assert_eq!(cache.len(), 1);

        assert!(cache.get_at("k", 10).is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_wall_clock_expiration() {
        let mut cache = TtlCache::new();
        cache.put("k", "v", 50);

        assert!(cache.get("k").is_some());

        sleep(Duration::from_millis(120));

        assert!(cache.get("k").is_none());
    }

    #[test]
    fn test_store_stats() {
        let mut cache = TtlCache::new();

        cache.put_at("k1", "v1", 1_000, 0);
        cache.put_at("k2", "v2", 1_000, 0);
        cache.get_at("k1", 10); // hit
        cache.get_at("missing", 10); // miss
        cache.get_at("k2", 2_000); // expired -> miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.total_entries, 1);
    }
}
