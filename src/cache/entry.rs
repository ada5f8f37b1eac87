//! Cache Entry Module
//!
//! Defines a single stored value together with its expiry instant.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A stored value with its expiry timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl_ms` after `now_ms`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_ms` - Time to live in milliseconds
    /// * `now_ms` - Creation instant (Unix milliseconds)
    pub fn new(value: V, ttl_ms: u64, now_ms: u64) -> Self {
        Self {
            value,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired at `now_ms`.
    ///
    /// An entry is visible strictly before `expires_at`; at the boundary
    /// itself it is already expired.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as 0 rather than panicking.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("board".to_string(), 30_000, 1_000);

        assert_eq!(entry.value, "board");
        assert_eq!(entry.expires_at, 31_000);
    }

    #[test]
    fn test_entry_visible_before_expiry() {
        let entry = CacheEntry::new(1u8, 30_000, 0);

        assert!(!entry.is_expired_at(0));
        assert!(!entry.is_expired_at(29_999));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(1u8, 30_000, 0);

        assert!(entry.is_expired_at(30_000), "Entry should be expired at boundary");
        assert!(entry.is_expired_at(31_000));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let now = current_timestamp_ms();
        let entry = CacheEntry::new(1u8, 0, now);

        assert!(entry.is_expired_at(now));
    }

    #[test]
    fn test_expiry_saturates_on_overflow() {
        let entry = CacheEntry::new(1u8, u64::MAX, 10);
        assert_eq!(entry.expires_at, u64::MAX);
    }
}
